//! Quotes and the quote store.

use std::fmt;
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{UpliftError, UpliftResult};

/// A motivational quote.
///
/// Canonical field names are `text` and `author`; the loader also accepts the
/// legacy export names `quoteText`/`quoteAuthor` so older quote files keep
/// working.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    #[serde(alias = "quoteText")]
    pub text: String,
    #[serde(alias = "quoteAuthor")]
    pub author: String,
}

impl Quote {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Quote {
            text: text.into(),
            author: author.into(),
        }
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\"{}\" - {}", self.text, self.author)
    }
}

/// An in-memory quote collection with random selection.
#[derive(Debug, Clone, Default)]
pub struct QuoteStore {
    quotes: Vec<Quote>,
}

impl QuoteStore {
    pub fn new(quotes: Vec<Quote>) -> Self {
        QuoteStore { quotes }
    }

    /// The built-in quotes used when no source file is available.
    pub fn fallback() -> Self {
        let anonymous = "Anonymous";
        QuoteStore::new(vec![
            Quote::new("We can only learn to love by loving", "Iris Murdoch"),
            Quote::new(
                "It's easier to see the mistakes on someone else's paper.",
                anonymous,
            ),
            Quote::new(
                "Trust yourself. You know more than you think you do.",
                "Benjamin Spock",
            ),
            Quote::new("The day is already blessed, find peace within it.", anonymous),
            Quote::new("Be as you wish to seem.", "Socrates"),
        ])
    }

    /// Load quotes from a source file, falling back to the built-in set on
    /// any failure. A `.json` file holds an array of quotes; anything else is
    /// read as `text|author` lines.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(store) if !store.is_empty() => store,
            _ => Self::fallback(),
        }
    }

    fn try_load(path: &Path) -> UpliftResult<Self> {
        let contents = std::fs::read_to_string(path)?;

        let quotes = if path.extension().is_some_and(|e| e == "json") {
            serde_json::from_str(&contents)
                .map_err(|e| UpliftError::SourceUnavailable(e.to_string()))?
        } else {
            contents
                .lines()
                .filter_map(|line| {
                    let (text, author) = line.split_once('|')?;
                    Some(Quote::new(text.trim(), author.trim()))
                })
                .collect()
        };

        Ok(QuoteStore::new(quotes))
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Uniform random pick by index; `None` when the store is empty.
    pub fn pick_random(&self) -> Option<&Quote> {
        if self.quotes.is_empty() {
            return None;
        }
        let index = rand::thread_rng().gen_range(0..self.quotes.len());
        self.quotes.get(index)
    }

    /// Random pick among quotes by the given author (case-insensitive).
    /// When the author has no quotes, falls back to the whole store.
    pub fn pick_random_by_author(&self, author: &str) -> Option<&Quote> {
        let matching: Vec<&Quote> = self
            .quotes
            .iter()
            .filter(|q| q.author.eq_ignore_ascii_case(author))
            .collect();

        if matching.is_empty() {
            return self.pick_random();
        }
        let index = rand::thread_rng().gen_range(0..matching.len());
        matching.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_random_empty_store_is_none() {
        let store = QuoteStore::default();
        assert!(store.pick_random().is_none());
    }

    #[test]
    fn test_pick_random_single_quote() {
        let store = QuoteStore::new(vec![Quote::new("Only one", "Me")]);
        assert_eq!(store.pick_random().unwrap().text, "Only one");
    }

    #[test]
    fn test_pick_by_author_filters_case_insensitively() {
        let store = QuoteStore::new(vec![
            Quote::new("A", "Socrates"),
            Quote::new("B", "Plato"),
        ]);
        assert_eq!(store.pick_random_by_author("socrates").unwrap().text, "A");
    }

    #[test]
    fn test_pick_by_unknown_author_falls_back_to_any() {
        let store = QuoteStore::new(vec![Quote::new("A", "Socrates")]);
        assert_eq!(store.pick_random_by_author("Nobody").unwrap().text, "A");
    }

    #[test]
    fn test_legacy_field_names_are_accepted() {
        let json = r#"[{"quoteText": "Old shape", "quoteAuthor": "System"}]"#;
        let quotes: Vec<Quote> = serde_json::from_str(json).unwrap();
        assert_eq!(quotes[0], Quote::new("Old shape", "System"));
    }

    #[test]
    fn test_fallback_is_never_empty() {
        assert!(!QuoteStore::fallback().is_empty());
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let store = QuoteStore::load(Path::new("/nonexistent/quotes.json"));
        assert_eq!(store.len(), QuoteStore::fallback().len());
    }
}
