//! itemsync CLI
//!
//! Command-line front end for validating and inspecting behavior files.

mod cli;
mod commands;
mod error;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Validate { file, json }) => commands::run_validate(&file, json),
        Some(Commands::Show { file }) => commands::run_show(&file),
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "itemsync", &mut std::io::stdout());
            Ok(())
        }
        None => {
            // No command provided - show help hint
            println!(
                "{} Copy work item fields between linked tracker items",
                "itemsync".green().bold()
            );
            println!();
            println!("Run {} for available commands.", "itemsync --help".cyan());
            Ok(())
        }
    }
}
