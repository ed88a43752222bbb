//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// itemsync - Copy work item fields between linked tracker items
#[derive(Parser, Debug)]
#[command(name = "itemsync")]
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
    /// Validate a behavior file
    ///
    /// Parses the file, checks every behavior for hard errors, and
    /// reports lint findings. Warnings do not fail the command.
    ///
    /// Examples:
    ///   itemsync validate behaviors.toml
    ///   itemsync validate behaviors.toml --json
    Validate {
        /// Behavior file to validate
        file: PathBuf,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show the behaviors in a file
    ///
    /// Prints each behavior with its endpoints and column mappings.
    Show {
        /// Behavior file to read
        file: PathBuf,
    },

    /// Generate shell completions
    ///
    /// Outputs completion script for your shell.
    ///
    /// Examples:
    ///   itemsync completions bash > ~/.local/share/bash-completion/completions/itemsync
    ///   itemsync completions zsh > ~/.zfunc/_itemsync
    ///   itemsync completions fish > ~/.config/fish/completions/itemsync.fish
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_validate_command() {
        let cli = Cli::parse_from(["itemsync", "validate", "behaviors.toml"]);
        match cli.command {
            Some(Commands::Validate { file, json }) => {
                assert_eq!(file, PathBuf::from("behaviors.toml"));
                assert!(!json);
            }
            _ => panic!("Expected Validate command"),
        }
    }

    #[test]
    fn parse_validate_with_json() {
        let cli = Cli::parse_from(["itemsync", "validate", "behaviors.toml", "--json"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Validate { json: true, .. })
        ));
    }

    #[test]
    fn parse_show_command() {
        let cli = Cli::parse_from(["itemsync", "show", "behaviors.toml"]);
        assert!(matches!(cli.command, Some(Commands::Show { .. })));
    }

    #[test]
    fn parse_completions_command() {
        let cli = Cli::parse_from(["itemsync", "completions", "bash"]);
        assert!(matches!(cli.command, Some(Commands::Completions { .. })));
    }

    #[test]
    fn verbose_flag_is_global() {
        let cli = Cli::parse_from(["itemsync", "validate", "behaviors.toml", "-v"]);
        assert!(cli.verbose);
    }

    #[test]
    fn no_command_parses() {
        let cli = Cli::parse_from(["itemsync"]);
        assert!(cli.command.is_none());
    }
}
