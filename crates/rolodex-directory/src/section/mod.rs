//! Sorting contacts into alphabetical sections.
//!
//! Every record lands in exactly one section. Sections are keyed by the
//! uppercased first character (grapheme cluster) of the record's primary
//! name, by its leading ASCII digit, or by the `#` catch-all when there is no
//! usable name.
//!
//! Display order is letters (by code point), then digits ascending, then the
//! catch-all. [`SectionKey`]'s `Ord` encodes that order directly, so the
//! member map's key sequence is the header list.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Serialize, Serializer};
use unicode_segmentation::UnicodeSegmentation;

use rolodex_core::types::{NameField, SortMode};

use crate::record::ContactRecord;

/// Header label of the catch-all section.
pub const CATCH_ALL_MARKER: &str = "#";

/// A section header.
///
/// Variant order is display order; do not reorder.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionKey {
    /// Uppercased first grapheme cluster of a name. Combining marks stay
    /// attached, and uppercasing can yield more than one character (`ß`
    /// becomes `SS`).
    Initial(String),
    /// Leading ASCII digit, `0..=9`.
    Digit(u8),
    /// Records with no usable name.
    CatchAll,
}

impl SectionKey {
    /// Creates a key for a leading character, folding case and routing
    /// ASCII digits and `#` to their dedicated sections.
    #[must_use]
    pub fn initial(c: char) -> Self {
        Self::from_grapheme(c.encode_utf8(&mut [0; 4]))
    }

    fn from_grapheme(grapheme: &str) -> Self {
        match grapheme.as_bytes() {
            &[byte] if byte.is_ascii_digit() => Self::Digit(byte - b'0'),
            _ => {
                let folded = grapheme.to_uppercase();
                if folded == CATCH_ALL_MARKER {
                    Self::CatchAll
                } else {
                    Self::Initial(folded)
                }
            }
        }
    }

    /// ## Summary
    /// Derives the key for a single name component from its first grapheme
    /// cluster. An empty name maps to the catch-all.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        name.graphemes(true)
            .next()
            .map_or(Self::CatchAll, Self::from_grapheme)
    }

    #[must_use]
    pub const fn is_digit(&self) -> bool {
        matches!(self, Self::Digit(_))
    }

    #[must_use]
    pub const fn is_catch_all(&self) -> bool {
        matches!(self, Self::CatchAll)
    }
}

impl std::fmt::Display for SectionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Initial(initial) => f.write_str(initial),
            Self::Digit(digit) => write!(f, "{digit}"),
            Self::CatchAll => f.write_str(CATCH_ALL_MARKER),
        }
    }
}

impl Serialize for SectionKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Primary and secondary name selection for one sort mode.
///
/// Both the comparator and the grouping key go through this, so the two
/// modes share a single code path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameOrder {
    pub primary: NameField,
    pub secondary: NameField,
}

impl NameOrder {
    #[must_use]
    pub const fn for_mode(mode: SortMode) -> Self {
        Self {
            primary: mode.primary(),
            secondary: mode.secondary(),
        }
    }

    /// The primary name, or the secondary one when the primary is empty.
    fn effective_primary<'r, R: ContactRecord>(self, record: &'r R) -> &'r str {
        let primary = record.name(self.primary);
        if primary.is_empty() {
            record.name(self.secondary)
        } else {
            primary
        }
    }

    /// ## Summary
    /// Orders two records by `(effective primary, secondary)` using plain
    /// code-point comparison. No case folding.
    #[must_use]
    pub fn compare<R: ContactRecord>(self, a: &R, b: &R) -> Ordering {
        self.effective_primary(a)
            .cmp(self.effective_primary(b))
            .then_with(|| a.name(self.secondary).cmp(b.name(self.secondary)))
    }

    /// ## Summary
    /// Derives the section a record belongs to.
    ///
    /// Uses the primary name; if that yields the catch-all (empty, or
    /// starting with `#`), derives once more from the secondary name.
    #[must_use]
    pub fn section_key<R: ContactRecord>(self, record: &R) -> SectionKey {
        match SectionKey::from_name(record.name(self.primary)) {
            SectionKey::CatchAll => SectionKey::from_name(record.name(self.secondary)),
            key => key,
        }
    }
}

/// The sectioned directory produced by [`section_contacts`].
///
/// `sections` lists every non-empty section in display order;
/// concatenating the members of each section in that order yields exactly
/// the records of `sorted_contacts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SortingOutcome<R> {
    sections: Vec<SectionKey>,
    sorted_contacts: Vec<R>,
    section_members: BTreeMap<SectionKey, Vec<R>>,
}

impl<R> Default for SortingOutcome<R> {
    fn default() -> Self {
        Self {
            sections: Vec::new(),
            sorted_contacts: Vec::new(),
            section_members: BTreeMap::new(),
        }
    }
}

impl<R> SortingOutcome<R> {
    /// Section headers in display order.
    #[must_use]
    pub fn sections(&self) -> &[SectionKey] {
        &self.sections
    }

    /// Every record, in sort order.
    #[must_use]
    pub fn sorted_contacts(&self) -> &[R] {
        &self.sorted_contacts
    }

    #[must_use]
    pub const fn section_members(&self) -> &BTreeMap<SectionKey, Vec<R>> {
        &self.section_members
    }

    /// Members of `key`, in sort order. Empty if the section does not exist.
    #[must_use]
    pub fn members(&self, key: &SectionKey) -> &[R] {
        self.section_members.get(key).map_or(&[], Vec::as_slice)
    }

    /// Position of `key` in the header list, for index-bar jumps.
    #[must_use]
    pub fn section_index(&self, key: &SectionKey) -> Option<usize> {
        self.sections.binary_search(key).ok()
    }

    #[must_use]
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sorted_contacts.is_empty()
    }

    /// Splits the outcome into `(sections, sorted_contacts, section_members)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<SectionKey>, Vec<R>, BTreeMap<SectionKey, Vec<R>>) {
        (self.sections, self.sorted_contacts, self.section_members)
    }
}

/// ## Summary
/// Sorts `records` for `mode` and groups them into alphabetical sections.
///
/// The sort is stable: records that compare equal keep their input order.
/// Each section's members are a sub-sequence of the sorted records.
/// Empty names are valid input; this never fails.
#[must_use]
#[tracing::instrument(skip(records), fields(mode = %mode, count = tracing::field::Empty))]
pub fn section_contacts<R, I>(records: I, mode: SortMode) -> SortingOutcome<R>
where
    R: ContactRecord + Clone,
    I: IntoIterator<Item = R>,
{
    let order = NameOrder::for_mode(mode);

    let mut sorted_contacts: Vec<R> = records.into_iter().collect();
    tracing::Span::current().record("count", sorted_contacts.len());
    sorted_contacts.sort_by(|a, b| order.compare(a, b));

    let mut section_members: BTreeMap<SectionKey, Vec<R>> = BTreeMap::new();
    for contact in &sorted_contacts {
        section_members
            .entry(order.section_key(contact))
            .or_default()
            .push(contact.clone());
    }

    let sections: Vec<SectionKey> = section_members.keys().cloned().collect();
    tracing::debug!(sections = sections.len(), "Sectioned contacts");

    SortingOutcome {
        sections,
        sorted_contacts,
        section_members,
    }
}
