// Rust Agenda Application
// Main entry point

use anyhow::{Context, Result};
use clap::Parser;

use rust_agenda::cli::{self, Cli};
use rust_agenda::models::settings::Settings;
use rust_agenda::services::settings as settings_service;
use rust_agenda::services::storage::JsonFileStorage;
use rust_agenda::services::store::{AgendaStore, UuidIds};

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();

    let settings = match settings_service::default_settings_path() {
        Some(path) => settings_service::load(&path),
        None => Settings::default(),
    };

    let storage = JsonFileStorage::in_data_dir()
        .context("could not determine a data directory on this platform")?;
    let mut store = AgendaStore::open(Box::new(storage), Box::new(UuidIds));

    cli::run(cli, &mut store, &settings)
}
