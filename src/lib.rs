pub mod alliance;
pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod services;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use std::path::Path;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::database::SqliteStore;
use crate::services::import::ImportService;
use crate::services::ranking::RankingService;
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_import(file: &Path) -> Result<()> {
    let config = AppConfig::new();
    let store = SqliteStore::open(&config.store.database_path)?;
    let service = ImportService::new(store);
    let inserted = service.run(file)?;
    println!("Imported {inserted} teams");
    Ok(())
}

pub fn handle_rank(limit: Option<usize>) -> Result<()> {
    let config = AppConfig::new();
    let store = SqliteStore::open(&config.store.database_path)?;
    let service = RankingService::new(store, config.alliance);
    let alliances = service.top(limit)?;
    println!("{}", serde_json::to_string_pretty(&alliances)?);
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
