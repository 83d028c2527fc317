mod commands;
mod config;
mod inbox;
mod store;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "uplift")]
#[command(about = "Motivational quotes and a weekly activity schedule with reminders")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a random motivational quote
    Quote {
        /// Only pick quotes by this author
        #[arg(short, long)]
        author: Option<String>,

        /// Toggle the shown quote in favorites
        #[arg(short, long)]
        save: bool,
    },
    /// Manage saved quotes
    Favorites {
        #[command(subcommand)]
        command: FavoritesCommands,
    },
    /// Manage the weekly activity schedule
    Schedule {
        #[command(subcommand)]
        command: ScheduleCommands,
    },
    /// Extract work shifts from pasted schedule text and add them
    Import {
        /// File with the pasted email text (stdin when omitted)
        file: Option<PathBuf>,

        /// Search the configured inbox provider instead of reading text
        #[arg(long, conflicts_with = "file")]
        inbox: Option<String>,

        /// Add extracted shifts without confirming
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Run the reminder daemon (fires one hour before each activity)
    Remind {
        /// Print pending reminders and exit
        #[arg(long, conflicts_with = "once")]
        list: bool,

        /// Fire the next reminder and exit
        #[arg(long)]
        once: bool,
    },
}

#[derive(Subcommand)]
enum FavoritesCommands {
    /// List saved quotes
    List,
    /// Remove saved quotes matching this text
    Remove {
        /// The quote text to remove
        text: String,
    },
}

#[derive(Subcommand)]
enum ScheduleCommands {
    /// Add an activity
    Add {
        /// Activity name
        name: String,

        /// Weekday ("Monday" or "mon")
        #[arg(short, long)]
        day: String,

        /// 24-hour time (HH:MM)
        #[arg(short, long)]
        time: String,
    },
    /// Remove an activity by id
    Remove {
        /// Id shown by `schedule list`
        id: String,
    },
    /// List activities, ordered by day then time
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Quote { author, save } => commands::quote::run(author.as_deref(), save),
        Commands::Favorites { command } => match command {
            FavoritesCommands::List => commands::favorites::list(),
            FavoritesCommands::Remove { text } => commands::favorites::remove(&text),
        },
        Commands::Schedule { command } => match command {
            ScheduleCommands::Add { name, day, time } => {
                commands::schedule::add(&name, &day, &time)
            }
            ScheduleCommands::Remove { id } => commands::schedule::remove(&id),
            ScheduleCommands::List => commands::schedule::list(),
        },
        Commands::Import { file, inbox, yes } => {
            commands::import::run(file.as_deref(), inbox.as_deref(), yes).await
        }
        Commands::Remind { list, once } => {
            if list {
                commands::remind::list()
            } else {
                tracing_subscriber::fmt().with_target(false).init();
                commands::remind::run(once).await
            }
        }
    }
}
