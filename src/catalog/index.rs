use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use tracing::debug;

use crate::common::error::{CatalogError, Result};
use crate::domain::{Entry, EntrySummary, StatBlock};

static ENTRY_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("entry name regex compiles"));

/// Entry and book names are plain identifiers; anything else (path
/// separators, dots, whitespace) is rejected before any lookup happens.
pub fn entry_name_is_valid(name: &str) -> bool {
    ENTRY_NAME_RE.is_match(name)
}

/// Immutable lookup tables produced by [`super::CatalogLoader`].
///
/// Keys are `(friendly edition name, book, lowercased entry name)`, with an
/// empty book for entries sitting directly in the edition directory.
/// Nothing mutates this after startup; handlers share it behind an `Arc`.
pub struct CatalogIndex {
    pub(super) entries: HashMap<(String, String, String), Entry>,
    /// Lowercased friendly name -> canonical friendly name.
    pub(super) friendly: HashMap<String, String>,
    /// Lowercased folder code -> canonical friendly name.
    pub(super) aliases: HashMap<String, String>,
}

impl CatalogIndex {
    /// Resolve either name form of an edition to its canonical friendly
    /// name, case-insensitively.
    ///
    /// Editions resolve even when no entry of theirs loaded; whether an
    /// edition exists and whether an entry exists are separate questions.
    pub fn resolve_edition(&self, input: &str) -> Option<&str> {
        let key = input.to_lowercase();
        if let Some(name) = self.friendly.get(&key) {
            return Some(name);
        }
        self.aliases.get(&key).map(String::as_str)
    }

    /// Look up one entry by edition (either name form), optional book, and
    /// entry name. All three are case-insensitive.
    pub fn get(&self, edition: &str, book: Option<&str>, entry: &str) -> Result<&Entry> {
        if !entry_name_is_valid(entry) {
            return Err(CatalogError::InvalidEntryName(entry.to_string()));
        }
        if let Some(book) = book {
            if !entry_name_is_valid(book) {
                return Err(CatalogError::InvalidEntryName(book.to_string()));
            }
        }

        let friendly = self
            .resolve_edition(edition)
            .ok_or_else(|| CatalogError::EditionNotFound(edition.to_string()))?;

        let key = (
            friendly.to_string(),
            book.unwrap_or("").to_lowercase(),
            entry.to_lowercase(),
        );
        debug!(edition = %key.0, book = %key.1, entry = %key.2, "catalog lookup");

        self.entries
            .get(&key)
            .ok_or_else(|| CatalogError::EntryNotFound {
                edition: key.0,
                entry: key.2,
            })
    }

    /// Base-stats projection of [`CatalogIndex::get`]; no lookup logic of
    /// its own, so it cannot drift from the full-record path.
    pub fn base_stats(&self, edition: &str, book: Option<&str>, entry: &str) -> Result<&StatBlock> {
        Ok(&self.get(edition, book, entry)?.base_stats)
    }

    /// Growth-rates projection of [`CatalogIndex::get`].
    pub fn growth_rates(
        &self,
        edition: &str,
        book: Option<&str>,
        entry: &str,
    ) -> Result<&StatBlock> {
        Ok(&self.get(edition, book, entry)?.growth_rates)
    }

    /// Friendly names of editions with at least one loaded entry, sorted.
    pub fn editions(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .entries
            .keys()
            .map(|(edition, _, _)| edition.as_str())
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    /// Book names loaded under an edition, sorted. Empty for editions
    /// without book sub-directories.
    pub fn books(&self, edition: &str) -> Result<Vec<&str>> {
        let friendly = self
            .resolve_edition(edition)
            .ok_or_else(|| CatalogError::EditionNotFound(edition.to_string()))?;

        let mut books: Vec<&str> = self
            .entries
            .keys()
            .filter(|(e, b, _)| e == friendly && !b.is_empty())
            .map(|(_, b, _)| b.as_str())
            .collect();
        books.sort_unstable();
        books.dedup();
        Ok(books)
    }

    /// `{name, edition}` summaries for an edition (or one of its books),
    /// sorted by name.
    pub fn summaries(&self, edition: &str, book: Option<&str>) -> Result<Vec<EntrySummary>> {
        let friendly = self
            .resolve_edition(edition)
            .ok_or_else(|| CatalogError::EditionNotFound(edition.to_string()))?;
        let book_key = book.unwrap_or("").to_lowercase();

        let mut list: Vec<EntrySummary> = self
            .entries
            .iter()
            .filter(|((e, b, _), _)| e == friendly && *b == book_key)
            .map(|(_, entry)| EntrySummary {
                name: entry.name.clone(),
                edition: entry.edition.clone(),
            })
            .collect();
        list.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_identifiers_are_valid_entry_names() {
        assert!(entry_name_is_valid("ike"));
        assert!(entry_name_is_valid("black_knight"));
        assert!(entry_name_is_valid("Ranulf-2"));
    }

    #[test]
    fn path_fragments_are_not_valid_entry_names() {
        assert!(!entry_name_is_valid("../etc/passwd"));
        assert!(!entry_name_is_valid("ike.json"));
        assert!(!entry_name_is_valid("ike tank"));
        assert!(!entry_name_is_valid(""));
    }
}
