use anyhow::Result;

use frc_alliance_ranker::cli::Command;
use frc_alliance_ranker::{handle_completions, handle_import, handle_rank, handle_serve, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Import { file } => handle_import(file),
        Command::Rank { limit } => handle_rank(*limit),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
