//! Time math for weekly reminders.
//!
//! Reminders fire one hour before an activity's next occurrence. All math is
//! done on full instants, so a shift just after midnight reminds late the
//! previous evening instead of underflowing the hour field.

use chrono::{Datelike, Duration, NaiveDateTime};

use crate::day::Day;
use crate::schedule::ScheduleEntry;
use crate::time::TimeOfDay;

/// Next wall-clock instant strictly after `now` that falls on `day` at
/// `time`. A slot earlier today, or exactly now, rolls forward a full week.
pub fn next_occurrence(day: Day, time: TimeOfDay, now: NaiveDateTime) -> NaiveDateTime {
    let days_ahead =
        (day.index() as i64 + 7 - now.weekday().num_days_from_monday() as i64) % 7;
    let candidate = (now.date() + Duration::days(days_ahead)).and_time(time.to_naive());

    if candidate > now {
        candidate
    } else {
        candidate + Duration::days(7)
    }
}

/// When to alert for this slot: one hour before the next occurrence whose
/// alert instant is still in the future.
pub fn next_reminder(day: Day, time: TimeOfDay, now: NaiveDateTime) -> NaiveDateTime {
    next_occurrence(day, time, now + Duration::hours(1)) - Duration::hours(1)
}

/// A reminder the daemon has yet to fire.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingReminder {
    pub entry_id: String,
    pub name: String,
    pub day: Day,
    pub time: TimeOfDay,
    pub fire_at: NaiveDateTime,
    pub occurs_at: NaiveDateTime,
}

/// One pending reminder per schedule entry, earliest first.
///
/// Re-arming after a fire is a fresh call with the new `now`, never a second
/// timer for the same entry, so edits cannot leave duplicate reminders
/// armed.
pub fn upcoming<'a, I>(entries: I, now: NaiveDateTime) -> Vec<PendingReminder>
where
    I: IntoIterator<Item = &'a ScheduleEntry>,
{
    let mut pending: Vec<PendingReminder> = entries
        .into_iter()
        .map(|entry| {
            let fire_at = next_reminder(entry.day, entry.time, now);
            PendingReminder {
                entry_id: entry.id.clone(),
                name: entry.name.clone(),
                day: entry.day,
                time: entry.time,
                fire_at,
                occurs_at: fire_at + Duration::hours(1),
            }
        })
        .collect();

    pending.sort_by_key(|r| r.fire_at);
    pending
}
