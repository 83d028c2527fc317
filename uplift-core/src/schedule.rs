//! The weekly activity ledger.

use serde::{Deserialize, Serialize};

use crate::day::Day;
use crate::error::{UpliftError, UpliftResult};
use crate::time::TimeOfDay;

/// One recurring weekly activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: String,
    pub name: String,
    pub day: Day,
    pub time: TimeOfDay,
}

/// The weekly schedule. Persists as a plain array of entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScheduleLedger {
    entries: Vec<ScheduleEntry>,
}

impl ScheduleLedger {
    pub fn new() -> Self {
        ScheduleLedger::default()
    }

    /// Add an activity. The name must be non-empty after trimming; on error
    /// the ledger is unchanged.
    pub fn add(&mut self, name: &str, day: Day, time: TimeOfDay) -> UpliftResult<ScheduleEntry> {
        let name = name.trim();
        if name.is_empty() {
            return Err(UpliftError::Validation(
                "Activity name cannot be empty".to_string(),
            ));
        }

        let entry = ScheduleEntry {
            id: self.fresh_id(),
            name: name.to_string(),
            day,
            time,
        };
        self.entries.push(entry.clone());
        Ok(entry)
    }

    /// Creation-time id: the millisecond timestamp, bumped past any existing
    /// id so near-simultaneous adds stay unique within the ledger.
    fn fresh_id(&self) -> String {
        let mut millis = chrono::Utc::now().timestamp_millis();
        while self.entries.iter().any(|e| e.id == millis.to_string()) {
            millis += 1;
        }
        millis.to_string()
    }

    /// Remove an entry by id. Returns false (ledger unchanged) when the id
    /// is unknown; an absent id is not an error.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Entries ordered by day (Monday first), then time. The sort is stable,
    /// so entries sharing a slot keep insertion order.
    pub fn sorted(&self) -> Vec<&ScheduleEntry> {
        let mut entries: Vec<&ScheduleEntry> = self.entries.iter().collect();
        entries.sort_by_key(|e| (e.day.index(), e.time));
        entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScheduleEntry> {
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

    fn time(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    #[test]
    fn test_add_rejects_empty_name() {
        let mut ledger = ScheduleLedger::new();
        let err = ledger.add("   ", Day::Monday, time("09:00")).unwrap_err();
        assert!(matches!(err, UpliftError::Validation(_)));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_add_trims_name_and_assigns_id() {
        let mut ledger = ScheduleLedger::new();
        let entry = ledger.add("  Gym  ", Day::Friday, time("18:00")).unwrap();
        assert_eq!(entry.name, "Gym");
        assert!(!entry.id.is_empty());
    }

    #[test]
    fn test_rapid_adds_get_distinct_ids() {
        let mut ledger = ScheduleLedger::new();
        let a = ledger.add("A", Day::Monday, time("09:00")).unwrap();
        let b = ledger.add("B", Day::Monday, time("09:00")).unwrap();
        let c = ledger.add("C", Day::Monday, time("09:00")).unwrap();
        assert_ne!(a.id, b.id);
        assert_ne!(b.id, c.id);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut ledger = ScheduleLedger::new();
        ledger.add("Gym", Day::Friday, time("18:00")).unwrap();
        let before = ledger.clone();

        assert!(!ledger.remove("no-such-id"));
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_remove_by_id() {
        let mut ledger = ScheduleLedger::new();
        let entry = ledger.add("Gym", Day::Friday, time("18:00")).unwrap();
        assert!(ledger.remove(&entry.id));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_sorted_by_day_then_time_with_stable_ties() {
        let mut ledger = ScheduleLedger::new();
        ledger.add("Late Sunday", Day::Sunday, time("22:00")).unwrap();
        ledger.add("Tuesday run", Day::Tuesday, time("07:00")).unwrap();
        ledger.add("Monday late", Day::Monday, time("18:30")).unwrap();
        ledger.add("Monday early", Day::Monday, time("06:15")).unwrap();
        ledger.add("Also at 06:15", Day::Monday, time("06:15")).unwrap();

        let names: Vec<&str> = ledger.sorted().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Monday early",
                "Also at 06:15",
                "Monday late",
                "Tuesday run",
                "Late Sunday",
            ]
        );
    }
}
