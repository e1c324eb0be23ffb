use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One of the two name components a contact is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameField {
    Given,
    Family,
}

impl NameField {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Given => "given",
            Self::Family => "family",
        }
    }

    /// The other name component.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Given => Self::Family,
            Self::Family => Self::Given,
        }
    }
}

impl std::fmt::Display for NameField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a contact directory is ordered and grouped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    #[default]
    GivenName,
    FamilyName,
}

impl SortMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GivenName => "given_name",
            Self::FamilyName => "family_name",
        }
    }

    /// ## Summary
    /// The name component used as the main sort and grouping key.
    #[must_use]
    pub const fn primary(self) -> NameField {
        match self {
            Self::GivenName => NameField::Given,
            Self::FamilyName => NameField::Family,
        }
    }

    /// ## Summary
    /// The fallback name component, used for tie-breaking and when the
    /// primary component is empty.
    #[must_use]
    pub const fn secondary(self) -> NameField {
        self.primary().other()
    }
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "given" | "given_name" | "given-name" => Ok(Self::GivenName),
            "family" | "family_name" | "family-name" => Ok(Self::FamilyName),
            other => Err(CoreError::InvalidInput(format!("unknown sort mode: {other}"))),
        }
    }
}

/// Which group of contact fields a caller should request from its store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeySet {
    /// Fields needed to render a picker row.
    #[default]
    BasicDisplay,
    /// Every field the store can provide.
    All,
}

impl KeySet {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BasicDisplay => "basic_display",
            Self::All => "all",
        }
    }
}

impl std::fmt::Display for KeySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeySet {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" | "basic_display" | "basic-display" => Ok(Self::BasicDisplay),
            "all" => Ok(Self::All),
            other => Err(CoreError::InvalidInput(format!("unknown key set: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_mode_fields() {
        assert_eq!(SortMode::GivenName.primary(), NameField::Given);
        assert_eq!(SortMode::GivenName.secondary(), NameField::Family);
        assert_eq!(SortMode::FamilyName.primary(), NameField::Family);
        assert_eq!(SortMode::FamilyName.secondary(), NameField::Given);
    }

    #[test]
    fn sort_mode_from_str() {
        assert_eq!("given".parse::<SortMode>().ok(), Some(SortMode::GivenName));
        assert_eq!(
            "Family-Name".parse::<SortMode>().ok(),
            Some(SortMode::FamilyName)
        );
        assert!(matches!(
            "nickname".parse::<SortMode>(),
            Err(CoreError::InvalidInput(_))
        ));
    }

    #[test]
    fn display_matches_serde_names() {
        assert_eq!(SortMode::FamilyName.to_string(), "family_name");
        assert_eq!(KeySet::BasicDisplay.to_string(), "basic_display");
        assert_eq!(KeySet::default(), KeySet::BasicDisplay);
        assert_eq!("basic-display".parse::<KeySet>().ok(), Some(KeySet::BasicDisplay));
        assert!("everything".parse::<KeySet>().is_err());
    }
}
