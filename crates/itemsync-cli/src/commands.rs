//! Command implementations for itemsync-cli

use std::path::Path;

use colored::Colorize;
use serde::Serialize;

use itemsync_config::{BehaviorFile, EndpointConfig, LintWarning, WarnLevel, lint};

use crate::error::{CliError, Result};

/// JSON payload printed by `validate --json`.
#[derive(Debug, Serialize)]
struct ValidationReport {
    file: String,
    behaviors: usize,
    errors: Vec<String>,
    warnings: Vec<LintWarning>,
}

/// Run the validate command
///
/// Loads the file, checks every behavior for hard errors, and lints the
/// result. Lint warnings are advisory; load failures and validation
/// errors fail the command.
pub fn run_validate(path: &Path, json: bool) -> Result<()> {
    let file = BehaviorFile::load(path)?;

    let results: Vec<_> = file
        .behaviors
        .iter()
        .map(|behavior| behavior.validate())
        .collect();
    let errors: Vec<String> = results
        .iter()
        .filter_map(|r| r.as_ref().err())
        .map(|e| e.to_string())
        .collect();
    let warnings = lint(&file);

    if json {
        let report = ValidationReport {
            file: path.display().to_string(),
            behaviors: file.behaviors.len(),
            errors: errors.clone(),
            warnings,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_validation(path, &file, &results, &warnings);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(CliError::user(format!(
            "{} of {} behavior(s) failed validation",
            errors.len(),
            file.behaviors.len()
        )))
    }
}

fn print_validation(
    path: &Path,
    file: &BehaviorFile,
    results: &[itemsync_config::Result<()>],
    warnings: &[LintWarning],
) {
    println!(
        "{} {} behavior(s) in {}",
        "=>".blue().bold(),
        file.behaviors.len(),
        path.display()
    );

    for (behavior, result) in file.behaviors.iter().zip(results) {
        match result {
            Ok(()) => println!("  [{}] {}", "ok".green(), behavior.effective_title()),
            Err(e) => println!("  [{}] {}", "error".red(), e),
        }
    }

    if !warnings.is_empty() {
        println!();
        println!(
            "{} Found {} warning(s):",
            "=>".blue().bold(),
            warnings.len()
        );
        for w in warnings {
            let prefix = match w.level {
                WarnLevel::Info => "info".cyan(),
                WarnLevel::Warning => "warn".yellow(),
            };
            println!("  [{}] {}: {}", prefix, w.behavior.bold(), w.message);
        }
    }

    let clean = results.iter().all(|r| r.is_ok()) && warnings.is_empty();
    if clean {
        println!("{} Configuration is clean.", "OK".green().bold());
    }
}

/// Run the show command
///
/// Prints each behavior with its endpoints and column mappings.
pub fn run_show(path: &Path) -> Result<()> {
    let file = BehaviorFile::load(path)?;

    println!(
        "{} {} behavior(s) in {}",
        "=>".blue().bold(),
        file.behaviors.len(),
        path.display()
    );
    for behavior in &file.behaviors {
        println!();
        println!("{}", behavior.effective_title().bold());
        print_endpoint("source", &behavior.source);
        print_endpoint("target", &behavior.target);
        for mapping in &behavior.mappings {
            println!("  mapping: {} -> {}", mapping.source, mapping.target);
        }
    }
    Ok(())
}

fn print_endpoint(label: &str, endpoint: &EndpointConfig) {
    if endpoint.find.is_empty() {
        println!("  {}: {} / {}", label, endpoint.project, endpoint.view);
    } else {
        println!(
            "  {}: {} / {} (find: \"{}\")",
            label, endpoint.project, endpoint.view, endpoint.find
        );
    }
}
