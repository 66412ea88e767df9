use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "FRC scouting dashboard backend and alliance ranker")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the backend server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Import a team roster from a CSV export of the scouting spreadsheet
    Import {
        /// Path to the CSV file
        file: PathBuf,
    },
    /// Print the strongest alliances for the stored roster as JSON
    Rank {
        /// Number of alliances to print (defaults to 10)
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Generate a shell completion script
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
