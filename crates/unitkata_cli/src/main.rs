//! CLI entry point for the unitkata core units.
//!
//! # Responsibility
//! - Expose the bounded adder and alphabet service as shell commands.
//! - Keep output deterministic so runs are easy to diff.

use clap::{Parser, Subcommand};
use log::{info, warn};
use std::error::Error;
use std::process::ExitCode;
use std::sync::Arc;
use unitkata_core::{
    AlphabetService, AlphabetSong, BoundedAdder, InMemoryLetterRepository,
};

/// Run the unitkata units from the shell.
#[derive(Debug, Parser)]
#[command(name = "unitkata", version, about, long_about = None)]
struct Cli {
    /// Log level: trace|debug|info|warn|error.
    #[arg(long, env = "UNITKATA_LOG_LEVEL", global = true)]
    log_level: Option<String>,

    /// Absolute directory for log files. Logging stays off when unset.
    #[arg(long, env = "UNITKATA_LOG_DIR", global = true)]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Add two integers, accepting only sums in [0, 100].
    Add {
        #[arg(allow_hyphen_values = true)]
        augend: i32,
        #[arg(allow_hyphen_values = true)]
        addend: i32,
    },
    /// Print the uppercase letter at a zero-based alphabet index.
    Letter { index: u32 },
    /// Store an alphabet song and print what the repository returned.
    ///
    /// Omitting both flags sends an absent song.
    Song {
        #[arg(long, requires = "length")]
        id: Option<i64>,
        #[arg(long, requires = "id")]
        length: Option<i64>,
    },
    /// Print the core crate version.
    Version,
}

fn main() -> ExitCode {
    execute(Cli::parse())
}

fn execute(cli: Cli) -> ExitCode {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli
            .log_level
            .as_deref()
            .unwrap_or(unitkata_core::default_log_level());
        if let Err(err) = unitkata_core::init_logging(level, log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let code = match run(cli.command) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            warn!("event=command module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    };
    unitkata_core::flush_logging();
    code
}

fn run(command: Command) -> Result<String, Box<dyn Error>> {
    info!("event=command module=cli status=start command={command:?}");
    match command {
        Command::Add { augend, addend } => {
            let sum = BoundedAdder::new(augend, addend).compute()?;
            Ok(sum.to_string())
        }
        Command::Letter { index } => {
            let repo = InMemoryLetterRepository::new();
            let service = AlphabetService::new(&repo);
            Ok(service.uppercase_letter_by_index(index)?.to_string())
        }
        Command::Song { id, length } => {
            let repo = InMemoryLetterRepository::new();
            let service = AlphabetService::new(&repo);
            let song = id
                .zip(length)
                .map(|(id, length)| Arc::new(AlphabetSong::new(id, length)));
            let updated = service.update_alphabet_song(song)?;
            Ok(format!(
                "id={} length_in_minutes={}",
                updated.id, updated.length_in_minutes
            ))
        }
        Command::Version => Ok(unitkata_core::core_version().to_string()),
    }
}
