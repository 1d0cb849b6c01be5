//! Terminal frontend for the Delve dungeon crawler.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "delve",
    about = "Delve — a turn-based dungeon crawler",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a new delve, or resume the saved one if present
    Play {
        /// Directory holding the save files (default: current directory)
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// RNG seed for a reproducible playthrough
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Show the saved game, if any
    Status {
        /// Directory holding the save files
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Delete the saved game
    Reset {
        /// Directory holding the save files
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { dir, seed } => commands::play::run(&dir, seed),
        Commands::Status { dir } => commands::status::run(&dir),
        Commands::Reset { dir } => commands::reset::run(&dir),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
