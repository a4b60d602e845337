//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// AutoRevision - Maintain revision history headers in source files
#[derive(Parser, Debug)]
#[command(name = "autorev")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Add the next revision entry to a file
    ///
    /// Files without history get the full default header with REV.00.
    ///
    /// Examples:
    ///   autorev stamp app/models/user.rb -m "fix validation"
    ///   autorev stamp web/chart.js --signature AB --dry-run
    ///   autorev stamp script.txt --language ruby
    Stamp {
        /// File to update
        file: PathBuf,

        /// Language id (ruby, javascript); detected from the extension if omitted
        #[arg(short, long)]
        language: Option<String>,

        /// Author signature written after BY.
        #[arg(short, long, env = "AUTOREV_SIGNATURE")]
        signature: Option<String>,

        /// Message written under the new entry
        #[arg(short, long, env = "AUTOREV_MESSAGE")]
        message: Option<String>,

        /// Preview the change as a diff without writing the file
        #[arg(long)]
        dry_run: bool,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show the latest revision entry of a file
    Show {
        /// File to inspect
        file: PathBuf,

        /// Language id (ruby, javascript); detected from the extension if omitted
        #[arg(short, long)]
        language: Option<String>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List supported languages
    Languages,
}
