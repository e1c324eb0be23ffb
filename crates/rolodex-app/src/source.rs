//! JSON file record source.

use std::fs;
use std::path::Path;

use rolodex_core::error::{CoreError, CoreResult};
use rolodex_directory::Contact;

/// ## Summary
/// Reads a JSON array of contacts from `path`.
///
/// ## Errors
/// Returns `CoreError::Io` if the file cannot be read, `CoreError::Json` if
/// it is not a contact array, and `CoreError::InvalidInput` if it is empty.
pub fn load_contacts(path: &Path) -> CoreResult<Vec<Contact>> {
    let text = fs::read_to_string(path)?;
    parse_contacts(&text)
}

/// ## Summary
/// Parses a JSON array of contacts.
///
/// ## Errors
/// Returns `CoreError::Json` on malformed input and `CoreError::InvalidInput`
/// on blank input.
pub fn parse_contacts(text: &str) -> CoreResult<Vec<Contact>> {
    if text.trim().is_empty() {
        return Err(CoreError::InvalidInput("contact source is empty".to_string()));
    }
    let contacts: Vec<Contact> = serde_json::from_str(text)?;
    tracing::debug!(count = contacts.len(), "Parsed contacts");
    Ok(contacts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_contacts() {
        let contacts = parse_contacts(r#"[{"givenName":"Ada"},{"familyName":"Babbage"}]"#)
            .expect("contacts should parse");

        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[1].family_name, "Babbage");
    }

    #[test]
    fn test_empty_array_is_valid() {
        let contacts = parse_contacts("[]").expect("empty array should parse");
        assert!(contacts.is_empty());
    }

    #[test]
    fn test_blank_input_is_rejected() {
        assert!(matches!(
            parse_contacts("  \n"),
            Err(CoreError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_malformed_input_is_rejected() {
        assert!(matches!(
            parse_contacts(r#"{"givenName":"Ada"}"#),
            Err(CoreError::Json(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = load_contacts(Path::new("/nonexistent/rolodex/contacts.json"));
        assert!(matches!(result, Err(CoreError::Io(_))));
    }
}
