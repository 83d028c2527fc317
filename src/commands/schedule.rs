//! Manage the weekly activity schedule.

use anyhow::Result;

use crate::store::Store;
use uplift_core::day::Day;
use uplift_core::time::TimeOfDay;

pub fn add(name: &str, day: &str, time: &str) -> Result<()> {
    let day: Day = day.parse()?;
    let time: TimeOfDay = time.parse()?;

    let store = Store::open_default()?;
    let mut schedule = store.load_schedule();
    let entry = schedule.add(name, day, time)?;
    store.save_schedule(&schedule)?;

    println!(
        "Added {} on {} at {} (id {})",
        entry.name, entry.day, entry.time, entry.id
    );
    Ok(())
}

pub fn remove(id: &str) -> Result<()> {
    let store = Store::open_default()?;
    let mut schedule = store.load_schedule();

    if schedule.remove(id) {
        store.save_schedule(&schedule)?;
        println!("Removed activity {}.", id);
    } else {
        println!("No activity with id {}.", id);
    }

    Ok(())
}

pub fn list() -> Result<()> {
    let store = Store::open_default()?;
    let schedule = store.load_schedule();

    if schedule.is_empty() {
        println!("No activities scheduled yet.");
        return Ok(());
    }

    for entry in schedule.sorted() {
        println!(
            "{}  {:<9} {}  {}",
            entry.id,
            entry.day.name(),
            entry.time,
            entry.name
        );
    }

    Ok(())
}
