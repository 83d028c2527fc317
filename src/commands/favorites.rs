//! List and remove saved quotes.

use anyhow::Result;

use crate::store::Store;

pub fn list() -> Result<()> {
    let store = Store::open_default()?;
    let favorites = store.load_favorites();

    if favorites.is_empty() {
        println!("No saved quotes yet. Save one with `uplift quote --save`.");
        return Ok(());
    }

    for quote in favorites.iter() {
        println!("\"{}\"", quote.text);
        println!("  - {}", quote.author);
    }

    Ok(())
}

/// Removal matches on text alone: the listing (like the delete button it
/// replaces) identifies a saved quote by its text, not by (text, author).
pub fn remove(text: &str) -> Result<()> {
    let store = Store::open_default()?;
    let mut favorites = store.load_favorites();

    let removed = favorites.remove_by_text(text);
    store.save_favorites(&favorites)?;

    if removed == 0 {
        println!("No saved quote with that text.");
    } else {
        println!("Removed {} quote(s) from favorites.", removed);
    }

    Ok(())
}
