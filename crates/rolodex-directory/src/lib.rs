//! Alphabetically indexed contact directories.
//!
//! ## Overview
//!
//! Turns an unordered set of contact records into the data behind a
//! contact picker: section headers (`A`..`Z`, one per leading digit, and a
//! `#` catch-all), the contacts in sorted order, and the members of each
//! section.
//!
//! ## Usage
//!
//! ```rust
//! use rolodex_directory::{Contact, SectionKey, SortMode, section_contacts};
//!
//! let contacts = vec![Contact::new("Bob", "Zeta"), Contact::new("alice", "Young")];
//! let outcome = section_contacts(contacts, SortMode::GivenName);
//!
//! assert_eq!(outcome.sections(), &[SectionKey::initial('a'), SectionKey::initial('B')]);
//! assert_eq!(outcome.members(&SectionKey::initial('A'))[0].given_name, "alice");
//! ```
//!
//! ## Submodules
//!
//! - [`record`] - The `ContactRecord` trait and the stock `Contact` record
//! - [`keys`] - Field key sets a caller requests from its contact store
//! - [`filter`] - Predicates applied before sectioning
//! - [`section`] - The sectioner itself

pub mod filter;
pub mod keys;
pub mod record;
pub mod section;

pub use filter::{ContactFilter, filter_contacts, has_phone_number};
pub use keys::{ContactKey, key_descriptors};
pub use record::{Contact, ContactRecord};
pub use rolodex_core::types::{KeySet, NameField, SortMode};
pub use section::{CATCH_ALL_MARKER, NameOrder, SectionKey, SortingOutcome, section_contacts};
