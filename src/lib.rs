//! rTable library root.
//! Exposes the availability calculator, the reservation intake, the CLI
//! parser and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use chrono::NaiveDateTime;
use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use ui::messages::warning;

pub use crate::core::logic::Availability;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Status { .. } => cli::commands::status::handle(&cli.command, cfg, now),
        Commands::Hours { .. } => cli::commands::hours::handle(&cli.command, cfg),
        Commands::Slots { .. } => cli::commands::slots::handle(&cli.command, cfg, now),
        Commands::Check { .. } => cli::commands::check::handle(&cli.command, cfg, now),
        Commands::Reserve { .. } => cli::commands::reserve::handle(&cli.command, cfg, now),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg, now),
        Commands::Cancel { .. } => cli::commands::cancel::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config ONCE; an invalid schedule stops everything except `config`
    let mut cfg = match Config::load() {
        Ok(cfg) => cfg,
        Err(e) if matches!(cli.command, Commands::Config { .. }) => {
            warning(format!("{e} (using defaults)"));
            Config::default()
        }
        Err(e) => return Err(e),
    };

    // 3️⃣ command-line DB override
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    // 4️⃣ the clock is read here and nowhere else
    let now = match &cli.now {
        Some(s) => utils::date::parse_datetime(s)?,
        None => cfg.local_now()?,
    };

    dispatch(&cli, &cfg, now)
}
