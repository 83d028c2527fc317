//! Durable storage for the favorites and schedule ledgers.
//!
//! Each ledger lives under its own key as a JSON file in the data
//! directory. Loading absorbs both "never saved" and "corrupted" into the
//! empty default, so bad data can never lock the user out; saving the same
//! state twice is a no-op in effect.

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::path::PathBuf;

use uplift_core::favorites::FavoritesLedger;
use uplift_core::schedule::ScheduleLedger;

pub const FAVORITES_KEY: &str = "favorites";
pub const SCHEDULE_KEY: &str = "schedule";

pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn new(dir: PathBuf) -> Self {
        Store { dir }
    }

    pub fn open_default() -> Result<Self> {
        Ok(Store::new(crate::config::data_dir()?))
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Load a collection; missing and corrupt files both yield the default.
    pub fn load<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let Ok(contents) = std::fs::read_to_string(self.key_path(key)) else {
            return T::default();
        };
        serde_json::from_str(&contents).unwrap_or_default()
    }

    /// Persist a collection as pretty-printed JSON.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create data directory at {}", self.dir.display()))?;

        let path = self.key_path(key);
        let contents =
            serde_json::to_string_pretty(value).context("Failed to serialize ledger")?;
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        Ok(())
    }

    pub fn load_favorites(&self) -> FavoritesLedger {
        self.load(FAVORITES_KEY)
    }

    pub fn save_favorites(&self, ledger: &FavoritesLedger) -> Result<()> {
        self.save(FAVORITES_KEY, ledger)
    }

    pub fn load_schedule(&self) -> ScheduleLedger {
        self.load(SCHEDULE_KEY)
    }

    pub fn save_schedule(&self, ledger: &ScheduleLedger) -> Result<()> {
        self.save(SCHEDULE_KEY, ledger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uplift_core::day::Day;
    use uplift_core::quote::Quote;

    fn temp_store() -> (tempfile::TempDir, Store) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().to_path_buf());
        (dir, store)
    }

    #[test]
    fn test_favorites_round_trip() {
        let (_dir, store) = temp_store();

        let mut ledger = FavoritesLedger::new();
        ledger.toggle(&Quote::new("Be as you wish to seem.", "Socrates"));
        ledger.toggle(&Quote::new("Trust yourself.", "Benjamin Spock"));

        store.save_favorites(&ledger).unwrap();
        assert_eq!(store.load_favorites(), ledger);
    }

    #[test]
    fn test_schedule_round_trip() {
        let (_dir, store) = temp_store();

        let mut ledger = ScheduleLedger::new();
        ledger.add("Gym", Day::Friday, "18:00".parse().unwrap()).unwrap();
        ledger.add("Run", Day::Monday, "06:30".parse().unwrap()).unwrap();

        store.save_schedule(&ledger).unwrap();
        assert_eq!(store.load_schedule(), ledger);
    }

    #[test]
    fn test_never_saved_loads_empty() {
        let (_dir, store) = temp_store();
        assert!(store.load_favorites().is_empty());
        assert!(store.load_schedule().is_empty());
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let (dir, store) = temp_store();
        std::fs::write(dir.path().join("schedule.json"), "{not json").unwrap();
        assert!(store.load_schedule().is_empty());
    }

    #[test]
    fn test_saving_twice_is_idempotent() {
        let (_dir, store) = temp_store();

        let mut ledger = FavoritesLedger::new();
        ledger.toggle(&Quote::new("Once", "A"));

        store.save_favorites(&ledger).unwrap();
        store.save_favorites(&ledger).unwrap();
        assert_eq!(store.load_favorites(), ledger);
    }
}
