use std::path::PathBuf;

use clap::Parser;

use rolodex_core::types::{KeySet, SortMode};

/// Print an alphabetically sectioned contact directory as JSON.
#[derive(Debug, Clone, Parser)]
#[command(name = "rolodex", version, about)]
pub struct Args {
    /// JSON file holding an array of contacts.
    pub input: PathBuf,

    /// Sort and group by `given` or `family` name. Overrides the config file.
    #[arg(long, short = 's')]
    pub sort: Option<SortMode>,

    /// Field set to request: `basic_display` or `all`. Overrides the config file.
    #[arg(long)]
    pub key_set: Option<KeySet>,

    /// Leave out contacts without a phone number.
    #[arg(long)]
    pub require_phone: bool,

    /// Print JSON on a single line.
    #[arg(long)]
    pub compact: bool,
}
