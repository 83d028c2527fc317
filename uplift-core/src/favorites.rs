//! The saved-quotes ledger.

use serde::{Deserialize, Serialize};

use crate::quote::Quote;

/// Saved quotes, with set semantics keyed by (text, author).
///
/// Persists as a plain array of quotes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoritesLedger {
    entries: Vec<Quote>,
}

impl FavoritesLedger {
    pub fn new() -> Self {
        FavoritesLedger::default()
    }

    /// Whether a quote with equal (text, author) is saved.
    pub fn is_saved(&self, quote: &Quote) -> bool {
        self.entries.iter().any(|q| q == quote)
    }

    /// Save the quote if absent, remove it if present. Removal drops every
    /// matching entry, so duplicates left behind by older data cannot
    /// accumulate. Returns whether the quote is saved after the call.
    pub fn toggle(&mut self, quote: &Quote) -> bool {
        if self.is_saved(quote) {
            self.entries.retain(|q| q != quote);
            false
        } else {
            self.entries.push(quote.clone());
            true
        }
    }

    /// Remove every entry whose text matches, regardless of author. The
    /// listing identifies a saved quote by its text alone, so removal does
    /// too; two authors sharing the exact same text are both removed.
    pub fn remove_by_text(&mut self, text: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|q| q.text != text);
        before - self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Quote> {
        self.entries.iter()
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

    fn quote() -> Quote {
        Quote::new("Be as you wish to seem.", "Socrates")
    }

    #[test]
    fn test_toggle_twice_is_identity_for_membership() {
        let mut ledger = FavoritesLedger::new();
        let q = quote();

        let was_saved = ledger.is_saved(&q);
        ledger.toggle(&q);
        ledger.toggle(&q);
        assert_eq!(ledger.is_saved(&q), was_saved);

        ledger.toggle(&q);
        let was_saved = ledger.is_saved(&q);
        ledger.toggle(&q);
        ledger.toggle(&q);
        assert_eq!(ledger.is_saved(&q), was_saved);
    }

    #[test]
    fn test_toggle_removes_accumulated_duplicates() {
        // Older revisions could write the same quote twice; a single toggle
        // must clear all of them.
        let json = r#"[
            {"text": "dup", "author": "A"},
            {"text": "dup", "author": "A"}
        ]"#;
        let mut ledger: FavoritesLedger = serde_json::from_str(json).unwrap();
        assert_eq!(ledger.len(), 2);

        ledger.toggle(&Quote::new("dup", "A"));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_same_text_different_author_are_distinct() {
        let mut ledger = FavoritesLedger::new();
        ledger.toggle(&Quote::new("shared", "A"));
        ledger.toggle(&Quote::new("shared", "B"));
        assert_eq!(ledger.len(), 2);

        ledger.toggle(&Quote::new("shared", "A"));
        assert_eq!(ledger.len(), 1);
        assert!(ledger.is_saved(&Quote::new("shared", "B")));
    }

    #[test]
    fn test_remove_by_text_ignores_author() {
        let mut ledger = FavoritesLedger::new();
        ledger.toggle(&Quote::new("shared", "A"));
        ledger.toggle(&Quote::new("shared", "B"));
        ledger.toggle(&Quote::new("other", "A"));

        assert_eq!(ledger.remove_by_text("shared"), 2);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.remove_by_text("missing"), 0);
    }
}
