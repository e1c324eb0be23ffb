//! Predicates applied to records before they reach the sectioner.

use crate::record::Contact;

/// A caller-supplied predicate; records it rejects are left out of the directory.
pub type ContactFilter<R> = dyn Fn(&R) -> bool + Send + Sync;

/// ## Summary
/// Keeps the records accepted by `predicate`, preserving their order.
#[must_use]
pub fn filter_contacts<R, F>(records: impl IntoIterator<Item = R>, predicate: F) -> Vec<R>
where
    F: Fn(&R) -> bool,
{
    let filtered: Vec<R> = records.into_iter().filter(|r| predicate(r)).collect();
    tracing::trace!(kept = filtered.len(), "Filtered contacts");
    filtered
}

/// Accepts contacts with at least one non-blank phone number.
#[must_use]
pub fn has_phone_number(contact: &Contact) -> bool {
    contact
        .phone_numbers
        .iter()
        .any(|number| !number.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_filter_drops_contacts_without_numbers() {
        let contacts = vec![
            Contact::new("Ada", "Lovelace").with_phone_number("+44 20 7946 0000"),
            Contact::new("Charles", "Babbage"),
            Contact::new("Mary", "Somerville").with_phone_number("  "),
            Contact::new("", "Herschel").with_phone_number("555-0100"),
        ];

        let kept = filter_contacts(contacts, has_phone_number);

        let names: Vec<&str> = kept.iter().map(|c| c.family_name.as_str()).collect();
        assert_eq!(names, ["Lovelace", "Herschel"]);
    }

    #[test]
    fn boxed_filter_is_usable() {
        let filter: Box<ContactFilter<Contact>> =
            Box::new(|contact: &Contact| contact.family_name.starts_with('B'));
        let contacts = vec![Contact::new("Ada", "Lovelace"), Contact::new("Charles", "Babbage")];

        let kept = filter_contacts(contacts, &*filter);

        assert_eq!(kept, vec![Contact::new("Charles", "Babbage")]);
    }
}
