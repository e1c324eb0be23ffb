//! Command-line front end for the contact directory.

pub mod cli;
pub mod source;

use anyhow::{Context, Result};
use serde::Serialize;

use rolodex_core::config::DirectoryConfig;
use rolodex_core::types::{KeySet, SortMode};
use rolodex_directory::{
    Contact, ContactFilter, ContactKey, SortingOutcome, filter_contacts, has_phone_number,
    key_descriptors, section_contacts,
};

use crate::cli::Args;

/// Directory settings after command-line overrides are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    pub sort_mode: SortMode,
    pub key_set: KeySet,
    pub require_phone_number: bool,
}

impl RunOptions {
    /// Layers command-line flags over the loaded directory configuration.
    #[must_use]
    pub fn resolve(config: &DirectoryConfig, args: &Args) -> Self {
        Self {
            sort_mode: args.sort.unwrap_or(config.sort_mode),
            key_set: args.key_set.unwrap_or(config.key_set),
            require_phone_number: args.require_phone || config.require_phone_number,
        }
    }
}

/// What the binary prints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryReport {
    pub sort_mode: SortMode,
    pub requested_keys: Vec<String>,
    #[serde(flatten)]
    pub outcome: SortingOutcome<Contact>,
}

/// ## Summary
/// Filters and sections `contacts` according to `options`.
#[must_use]
#[tracing::instrument(skip(contacts), fields(count = contacts.len()))]
pub fn build_report(contacts: Vec<Contact>, options: RunOptions) -> DirectoryReport {
    let keys: Vec<ContactKey> = key_descriptors(options.key_set);
    tracing::debug!(key_set = %options.key_set, keys = keys.len(), "Resolved key descriptors");

    let filter: Option<&ContactFilter<Contact>> = options
        .require_phone_number
        .then_some(&has_phone_number as &ContactFilter<Contact>);
    let contacts = match filter {
        Some(predicate) => filter_contacts(contacts, predicate),
        None => contacts,
    };

    DirectoryReport {
        sort_mode: options.sort_mode,
        requested_keys: keys.iter().map(ToString::to_string).collect(),
        outcome: section_contacts(contacts, options.sort_mode),
    }
}

/// ## Summary
/// Reads the record source named by `args` and renders the directory as JSON.
///
/// ## Errors
/// Returns an error if the contacts cannot be read or the report cannot be
/// serialized.
pub fn run(config: &DirectoryConfig, args: &Args) -> Result<String> {
    let options = RunOptions::resolve(config, args);
    tracing::info!(options = ?options, input = %args.input.display(), "Building directory");

    let contacts = source::load_contacts(&args.input)
        .with_context(|| format!("failed to load contacts from {}", args.input.display()))?;

    let report = build_report(contacts, options);
    tracing::info!(
        sections = report.outcome.section_count(),
        contacts = report.outcome.sorted_contacts().len(),
        "Directory built"
    );

    if args.compact {
        serde_json::to_string(&report).context("failed to serialize directory")
    } else {
        serde_json::to_string_pretty(&report).context("failed to serialize directory")
    }
}
