//! The reminder daemon: a desktop notification one hour before each
//! scheduled activity, re-armed weekly.

use anyhow::Result;
use chrono::Local;
use notify_rust::Notification;
use tracing::{info, warn};

use crate::store::Store;
use uplift_core::reminder::{upcoming, PendingReminder};

pub fn list() -> Result<()> {
    let store = Store::open_default()?;
    let schedule = store.load_schedule();
    let pending = upcoming(schedule.iter(), Local::now().naive_local());

    if pending.is_empty() {
        println!("No reminders pending; the schedule is empty.");
        return Ok(());
    }

    for reminder in &pending {
        println!(
            "{}  {} ({} {})",
            reminder.fire_at.format("%Y-%m-%d %H:%M"),
            reminder.name,
            reminder.day,
            reminder.time
        );
    }

    Ok(())
}

pub async fn run(once: bool) -> Result<()> {
    let store = Store::open_default()?;

    loop {
        // Recompute from the ledger every cycle: edits made while we slept
        // are picked up, and with a single pending timer an edited entry can
        // never leave a stale duplicate armed.
        let schedule = store.load_schedule();
        let now = Local::now().naive_local();
        let pending = upcoming(schedule.iter(), now);

        let Some(next) = pending.into_iter().next() else {
            info!("schedule is empty, nothing to remind");
            return Ok(());
        };

        let wait = (next.fire_at - now).to_std().unwrap_or_default();
        info!(name = %next.name, fire_at = %next.fire_at, "sleeping until next reminder");
        tokio::time::sleep(wait).await;

        // The sleep can last days; only fire if the entry still exists at
        // the same slot in the ledger we wake up to.
        if still_scheduled(&store.load_schedule(), &next) {
            fire(&next);
            if once {
                return Ok(());
            }
        } else {
            info!(name = %next.name, "entry changed while sleeping, skipping reminder");
        }
        // Loop around: this entry's next reminder is now a week out.
    }
}

/// Whether the entry behind a pending reminder is still scheduled at the
/// same day/time.
fn still_scheduled(
    schedule: &uplift_core::schedule::ScheduleLedger,
    reminder: &PendingReminder,
) -> bool {
    schedule
        .iter()
        .any(|e| e.id == reminder.entry_id && e.day == reminder.day && e.time == reminder.time)
}

/// Delivery is best-effort; a missing notification service logs a warning
/// and falls back to the terminal instead of taking the daemon down.
fn fire(reminder: &PendingReminder) {
    let body = format!(
        "{} starts at {} ({})",
        reminder.name, reminder.time, reminder.day
    );

    match Notification::new()
        .summary("Upcoming activity")
        .body(&body)
        .show()
    {
        Ok(_) => info!(name = %reminder.name, "reminder fired"),
        Err(e) => {
            warn!("failed to show notification: {}", e);
            println!("REMINDER: {}", body);
        }
    }
}
