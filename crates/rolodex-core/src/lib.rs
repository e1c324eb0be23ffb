//! Shared building blocks for the rolodex workspace.
//!
//! Holds the error type, the settings loader, and the small enums that both
//! the directory library and the command-line front end agree on.

pub mod config;
pub mod error;
pub mod types;
