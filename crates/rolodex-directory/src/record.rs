//! Contact records consumed by the sectioner.

use serde::{Deserialize, Serialize};

use rolodex_core::types::NameField;

/// Read access to the name components the directory is built from.
///
/// Records are never mutated by this crate. Any other data a record carries
/// passes through sectioning untouched.
pub trait ContactRecord {
    /// Given name (first name). May be empty.
    fn given_name(&self) -> &str;

    /// Family name (surname). May be empty.
    fn family_name(&self) -> &str;

    /// Returns the requested name component.
    fn name(&self, field: NameField) -> &str {
        match field {
            NameField::Given => self.given_name(),
            NameField::Family => self.family_name(),
        }
    }
}

impl<T: ContactRecord + ?Sized> ContactRecord for &T {
    fn given_name(&self) -> &str {
        (**self).given_name()
    }

    fn family_name(&self) -> &str {
        (**self).family_name()
    }
}

/// A contact as delivered by an address-book store.
///
/// Only the two name fields matter for ordering; the rest are display data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contact {
    /// Store-assigned identifier.
    pub identifier: String,
    /// Given names (first names).
    pub given_name: String,
    /// Family names (surnames).
    pub family_name: String,
    /// Organization name.
    pub organization_name: String,
    /// Phone numbers, in store order.
    pub phone_numbers: Vec<String>,
    /// Email addresses, in store order.
    pub email_addresses: Vec<String>,
    /// Whether the store holds a picture for this contact.
    pub image_data_available: bool,
}

impl Contact {
    /// Creates a contact with given and family names.
    #[must_use]
    pub fn new(given_name: impl Into<String>, family_name: impl Into<String>) -> Self {
        Self {
            given_name: given_name.into(),
            family_name: family_name.into(),
            ..Self::default()
        }
    }

    /// Sets the identifier.
    #[must_use]
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = identifier.into();
        self
    }

    /// Adds a phone number.
    #[must_use]
    pub fn with_phone_number(mut self, number: impl Into<String>) -> Self {
        self.phone_numbers.push(number.into());
        self
    }

    /// Adds an email address.
    #[must_use]
    pub fn with_email_address(mut self, address: impl Into<String>) -> Self {
        self.email_addresses.push(address.into());
        self
    }

    /// Formats as a display name (given + family), falling back to the
    /// organization when both names are empty.
    #[must_use]
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [self.given_name.as_str(), self.family_name.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect();
        if parts.is_empty() {
            self.organization_name.clone()
        } else {
            parts.join(" ")
        }
    }
}

impl ContactRecord for Contact {
    fn given_name(&self) -> &str {
        &self.given_name
    }

    fn family_name(&self) -> &str {
        &self.family_name
    }
}
