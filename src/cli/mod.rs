// CLI front end for the agenda
// Stands in for the calendar grid and modal form components

use std::io::{self, BufRead, Write as _};

use anyhow::{bail, Result};
use chrono::Local;
use clap::{Parser, Subcommand};

use crate::models::draft::{EventDraft, FieldErrors};
use crate::models::event::Event;
use crate::models::settings::Settings;
use crate::services::store::AgendaStore;
use crate::utils::date::{self, normalize_date, normalize_time, DateLike};

#[derive(Parser)]
#[command(name = "rust-agenda")]
#[command(about = "Personal agenda with color-coded events", version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List events in insertion order with their urgency
    List,
    /// Create a new event
    Add {
        /// Event title
        #[arg(long)]
        title: String,
        /// Optional details
        #[arg(long, default_value = "")]
        description: String,
        /// Event date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<String>,
        /// Event time (HH:MM); defaults from settings
        #[arg(long)]
        time: Option<String>,
    },
    /// Edit an existing event
    Edit {
        /// Id of the event to edit
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        time: Option<String>,
    },
    /// Delete an event (asks for confirmation)
    Remove {
        /// Id of the event to delete
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

pub fn run(cli: Cli, store: &mut AgendaStore, settings: &Settings) -> Result<()> {
    match cli.command {
        Commands::List => cmd_list(store),
        Commands::Add {
            title,
            description,
            date,
            time,
        } => cmd_add(store, settings, title, description, date, time),
        Commands::Edit {
            id,
            title,
            description,
            date,
            time,
        } => cmd_edit(store, settings, id, title, description, date, time),
        Commands::Remove { id, yes } => cmd_remove(store, id, yes),
    }
}

fn cmd_list(store: &AgendaStore) -> Result<()> {
    let entries = store.entries(date::today());
    if entries.is_empty() {
        println!("No events scheduled.");
        return Ok(());
    }

    for entry in &entries {
        println!(
            "{:<38}  {:<6}  {:<16}  {}",
            entry.id,
            entry.bucket.label(),
            entry.start,
            entry.title
        );
    }
    println!(
        "{} event{} total",
        entries.len(),
        if entries.len() == 1 { "" } else { "s" }
    );
    Ok(())
}

fn cmd_add(
    store: &mut AgendaStore,
    settings: &Settings,
    title: String,
    description: String,
    date: Option<String>,
    time: Option<String>,
) -> Result<()> {
    let selected = date.map(DateLike::from);
    let mut draft = EventDraft::for_date(selected.as_ref(), &settings.default_event_time);
    draft.title = title;
    draft.description = description;
    if selected.is_some() && time.is_none() {
        // A date flag alone means "sometime that day": use the default time
        // rather than the midnight a bare date normalizes to.
        draft.time = settings.default_event_time.clone();
    }
    if let Some(time) = time {
        draft.time = normalize_time(Some(&DateLike::from(time)), &settings.default_event_time);
    }

    match draft.submit(Local::now().naive_local()) {
        Ok(submission) => {
            let event = store.add(submission);
            println!("Created event {} ({})", event.id, event.date);
            Ok(())
        }
        Err(errors) => reject(errors),
    }
}

fn cmd_edit(
    store: &mut AgendaStore,
    settings: &Settings,
    id: String,
    title: Option<String>,
    description: Option<String>,
    date: Option<String>,
    time: Option<String>,
) -> Result<()> {
    let Some(event) = store.get(&id) else {
        bail!("no event with id '{id}'");
    };

    let mut draft = EventDraft::from_event(event, &settings.default_event_time);
    if let Some(title) = title {
        draft.title = title;
    }
    if let Some(description) = description {
        draft.description = description;
    }
    if let Some(date) = date {
        draft.date = normalize_date(Some(&DateLike::from(date)));
    }
    if let Some(time) = time {
        draft.time = normalize_time(Some(&DateLike::from(time)), &settings.default_event_time);
    }

    match draft.submit(Local::now().naive_local()) {
        Ok(submission) => {
            let record = Event {
                id: id.clone(),
                title: submission.title,
                description: submission.description,
                date: submission.date,
            };
            if !store.update(record) {
                bail!("no event with id '{id}'");
            }
            println!("Updated event {id}");
            Ok(())
        }
        Err(errors) => reject(errors),
    }
}

fn cmd_remove(store: &mut AgendaStore, id: String, yes: bool) -> Result<()> {
    let Some(event) = store.get(&id) else {
        bail!("no event with id '{id}'");
    };
    let title = event.title.clone();

    if !yes {
        print!("Delete event \"{title}\"? This cannot be undone [y/N] ");
        io::stdout().flush()?;
        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        if !confirmed(&answer) {
            println!("Cancelled.");
            return Ok(());
        }
    }

    if store.delete(&id) {
        println!("Deleted event {id}");
    }
    Ok(())
}

fn confirmed(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

fn reject(errors: FieldErrors) -> Result<()> {
    if let Some(message) = &errors.title {
        eprintln!("title: {message}");
    }
    if let Some(message) = &errors.date {
        eprintln!("date: {message}");
    }
    bail!("event was not saved");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmation_accepts_yes_variants_only() {
        assert!(confirmed("y\n"));
        assert!(confirmed("YES\n"));
        assert!(!confirmed("\n"));
        assert!(!confirmed("n\n"));
        assert!(!confirmed("sure\n"));
    }
}
