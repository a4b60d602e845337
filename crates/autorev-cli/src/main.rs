//! AutoRevision CLI
//!
//! Inserts or extends the revision history header of a source file.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use commands::StampOptions;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: failed to set up logging: {}", "warning".yellow().bold(), e);
    }
    if cli.verbose {
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} AutoRevision CLI", "autorev".green().bold());
            println!();
            println!("Run {} for available commands.", "autorev --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Stamp {
            file,
            language,
            signature,
            message,
            dry_run,
            json,
        } => {
            let options = StampOptions {
                language,
                signature,
                message,
                dry_run,
                json,
                global_config_dir: None,
            };
            commands::run_stamp(&file, &options)
        }
        Commands::Show {
            file,
            language,
            json,
        } => commands::run_show(&file, language.as_deref(), json),
        Commands::Languages => commands::run_languages(),
    }
}
