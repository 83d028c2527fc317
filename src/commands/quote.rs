//! Show a random quote, optionally toggling it in favorites.

use anyhow::Result;

use crate::config;
use crate::store::Store;
use uplift_core::quote::QuoteStore;

pub fn run(author: Option<&str>, save: bool) -> Result<()> {
    let cfg = config::load_config();
    let quotes = match config::quotes_path(&cfg) {
        Some(path) => QuoteStore::load(&path),
        None => QuoteStore::fallback(),
    };

    let picked = match author {
        Some(author) => quotes.pick_random_by_author(author),
        None => quotes.pick_random(),
    };

    let Some(quote) = picked else {
        println!("No quote available.");
        return Ok(());
    };

    println!("\"{}\"", quote.text);
    println!("  - {}", quote.author);

    if save {
        let store = Store::open_default()?;
        let mut favorites = store.load_favorites();
        let saved = favorites.toggle(quote);
        store.save_favorites(&favorites)?;

        if saved {
            println!("\nSaved to favorites.");
        } else {
            println!("\nRemoved from favorites.");
        }
    }

    Ok(())
}
