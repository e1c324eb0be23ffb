//! Property tests for the sectioner's structural guarantees.

use proptest::prelude::*;
use rolodex_directory::{
    Contact, ContactRecord, NameOrder, SectionKey, SortMode, SortingOutcome, section_contacts,
};

fn name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-zA-Z0-9#éß!]{1,4}",
    ]
}

fn contacts() -> impl Strategy<Value = Vec<Contact>> {
    prop::collection::vec(
        (name(), name(), "[0-9]{1,3}").prop_map(|(given, family, id)| {
            Contact::new(given, family).with_identifier(id)
        }),
        0..40,
    )
}

fn mode() -> impl Strategy<Value = SortMode> {
    prop_oneof![Just(SortMode::GivenName), Just(SortMode::FamilyName)]
}

fn sorted_multiset(contacts: &[Contact]) -> Vec<Contact> {
    let mut copy = contacts.to_vec();
    copy.sort_by(|a, b| {
        (&a.given_name, &a.family_name, &a.identifier).cmp(&(
            &b.given_name,
            &b.family_name,
            &b.identifier,
        ))
    });
    copy
}

fn concatenated(outcome: &SortingOutcome<Contact>) -> Vec<Contact> {
    outcome
        .sections()
        .iter()
        .flat_map(|section| outcome.members(section).iter().cloned())
        .collect()
}

fn is_subsequence(needle: &[Contact], haystack: &[Contact]) -> bool {
    let mut remaining = haystack.iter();
    needle
        .iter()
        .all(|wanted| remaining.any(|candidate| candidate == wanted))
}

proptest! {
    #[test]
    fn no_record_is_lost(input in contacts(), mode in mode()) {
        let outcome = section_contacts(input.clone(), mode);

        prop_assert_eq!(outcome.sorted_contacts().len(), input.len());
        prop_assert_eq!(
            sorted_multiset(outcome.sorted_contacts()),
            sorted_multiset(&input)
        );
    }

    #[test]
    fn sections_partition_sorted_contacts(input in contacts(), mode in mode()) {
        let outcome = section_contacts(input, mode);

        // Display order differs from sort order (digits and `#` sort first but
        // display last), so only the multisets match.
        prop_assert_eq!(
            sorted_multiset(&concatenated(&outcome)),
            sorted_multiset(outcome.sorted_contacts())
        );
        prop_assert_eq!(outcome.sections().len(), outcome.section_members().len());
        for section in outcome.sections() {
            prop_assert!(!outcome.members(section).is_empty());
        }
    }

    #[test]
    fn section_members_keep_global_order(input in contacts(), mode in mode()) {
        let outcome = section_contacts(input, mode);

        for members in outcome.section_members().values() {
            prop_assert!(is_subsequence(members, outcome.sorted_contacts()));
        }
    }

    #[test]
    fn every_member_belongs_to_its_section(input in contacts(), mode in mode()) {
        let order = NameOrder::for_mode(mode);
        let outcome = section_contacts(input, mode);

        for (section, members) in outcome.section_members() {
            for member in members {
                prop_assert_eq!(&order.section_key(member), section);
            }
        }
    }

    #[test]
    fn sorted_contacts_are_ordered(input in contacts(), mode in mode()) {
        let outcome = section_contacts(input, mode);
        let order = NameOrder::for_mode(mode);

        for pair in outcome.sorted_contacts().windows(2) {
            let effective = |c: &Contact| {
                let primary = c.name(order.primary).to_string();
                if primary.is_empty() { c.name(order.secondary).to_string() } else { primary }
            };
            let left = (effective(&pair[0]), pair[0].name(order.secondary).to_string());
            let right = (effective(&pair[1]), pair[1].name(order.secondary).to_string());
            prop_assert!(left <= right);
        }
    }

    #[test]
    fn resorting_is_idempotent(input in contacts(), mode in mode()) {
        let once = section_contacts(input, mode);
        let twice = section_contacts(once.sorted_contacts().to_vec(), mode);

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn digits_and_catch_all_form_the_tail(input in contacts(), mode in mode()) {
        let outcome = section_contacts(input, mode);
        let sections = outcome.sections();

        let first_digit = sections.iter().position(SectionKey::is_digit);
        let catch_all = sections.iter().position(SectionKey::is_catch_all);

        if let Some(index) = catch_all {
            prop_assert_eq!(index, sections.len() - 1);
        }
        if let Some(start) = first_digit {
            let end = catch_all.unwrap_or(sections.len());
            prop_assert!(sections[start..end].iter().all(SectionKey::is_digit));
            prop_assert!(sections[..start].iter().all(|s| matches!(s, SectionKey::Initial(_))));
        }
        prop_assert!(sections.windows(2).all(|w| w[0] < w[1]));
    }
}
