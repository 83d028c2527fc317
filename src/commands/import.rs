//! Extract work shifts from pasted schedule text (or inbox search results)
//! and add the accepted ones to the schedule.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use dialoguer::Confirm;

use crate::config;
use crate::inbox::InboxProvider;
use crate::store::Store;
use uplift_core::extract::{extract_shifts, ExtractedShift};

pub async fn run(file: Option<&Path>, inbox_query: Option<&str>, assume_yes: bool) -> Result<()> {
    let from_stdin = file.is_none() && inbox_query.is_none();
    let shifts = match inbox_query {
        Some(query) => search_inbox(query).await?,
        None => extract_shifts(&read_input(file)?),
    };

    if shifts.is_empty() {
        println!("No shifts found.");
        return Ok(());
    }

    println!("Found {} shift(s):", shifts.len());
    for shift in &shifts {
        println!(
            "  {:<9} {}-{}  ({})",
            shift.day.name(),
            shift.start,
            shift.end,
            shift.raw_range
        );
    }

    let accept = match decide(from_stdin, assume_yes) {
        Decision::Add => true,
        Decision::Ask => Confirm::new()
            .with_prompt("Add these to your schedule?")
            .default(true)
            .interact()?,
        Decision::NeedsYes => {
            println!("Re-run with --yes to add them (text read from stdin cannot be confirmed interactively).");
            return Ok(());
        }
    };

    if !accept {
        println!("Nothing added.");
        return Ok(());
    }

    let store = Store::open_default()?;
    let mut schedule = store.load_schedule();
    for shift in &shifts {
        schedule.add(&shift_name(shift), shift.day, shift.start)?;
    }
    store.save_schedule(&schedule)?;

    println!("Added {} activities to the schedule.", shifts.len());
    Ok(())
}

async fn search_inbox(query: &str) -> Result<Vec<ExtractedShift>> {
    let cfg = config::load_config();
    let provider_name = cfg.inbox_provider.context(
        "No inbox provider configured.\n\
        Set `inbox_provider` in config.toml to the name of an uplift-inbox-<name> binary.",
    )?;

    let provider = InboxProvider::from_name(&provider_name);
    let emails = provider.search(query).await?;
    println!("Fetched {} message(s) from {}", emails.len(), provider.name());

    Ok(emails
        .iter()
        .flat_map(|email| extract_shifts(&email.body))
        .collect())
}

#[derive(Debug, PartialEq)]
enum Decision {
    Add,
    Ask,
    NeedsYes,
}

/// Pasted text arriving on stdin leaves nothing for the confirmation prompt
/// to read, so that path needs `--yes` up front; file and inbox input can
/// still be confirmed on the terminal.
fn decide(from_stdin: bool, assume_yes: bool) -> Decision {
    if assume_yes {
        Decision::Add
    } else if from_stdin {
        Decision::NeedsYes
    } else {
        Decision::Ask
    }
}

fn shift_name(shift: &ExtractedShift) -> String {
    format!("Work shift {}-{}", shift.start, shift.end)
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read from stdin")?;
            Ok(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stdin_input_requires_explicit_yes() {
        assert_eq!(decide(true, false), Decision::NeedsYes);
        assert_eq!(decide(true, true), Decision::Add);
    }

    #[test]
    fn test_file_and_inbox_input_can_prompt() {
        assert_eq!(decide(false, false), Decision::Ask);
        assert_eq!(decide(false, true), Decision::Add);
    }
}
