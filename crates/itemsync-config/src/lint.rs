//! Advisory checks over behavior files
//!
//! Lint never fails a file: it surfaces configurations that parse and
//! validate but probably do not mean what the author wrote.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::loader::BehaviorFile;
use crate::schema::CopyConfig;

/// Severity level for lint warnings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarnLevel {
    /// Worth a look, probably fine
    Info,
    /// Likely misconfiguration
    Warning,
}

impl std::fmt::Display for WarnLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

/// A lint warning about one behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintWarning {
    /// Severity
    pub level: WarnLevel,
    /// Human-readable description
    pub message: String,
    /// Title of the behavior this relates to
    pub behavior: String,
}

/// Lint every behavior in the file.
///
/// Checks for:
/// - Target columns written by more than one mapping
/// - Builtin pairs whose value kinds cannot transfer
/// - Source and target resolving to the same view
/// - Source and target sharing a find expression
pub fn lint(file: &BehaviorFile) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    for behavior in &file.behaviors {
        lint_behavior(behavior, &mut warnings);
    }
    warnings
}

fn lint_behavior(config: &CopyConfig, warnings: &mut Vec<LintWarning>) {
    let title = config.effective_title();

    let mut seen = HashSet::new();
    for mapping in &config.mappings {
        if !seen.insert(&mapping.target) {
            warnings.push(LintWarning {
                level: WarnLevel::Warning,
                message: format!(
                    "Target column {} is written by more than one mapping; the last write wins.",
                    mapping.target
                ),
                behavior: title.clone(),
            });
        }
    }

    for mapping in &config.mappings {
        if let (Some(from), Some(to)) = (mapping.source.kind(), mapping.target.kind()) {
            if from != to {
                warnings.push(LintWarning {
                    level: WarnLevel::Warning,
                    message: format!(
                        "Mapping {} -> {} pairs a {} column with a {} column; the tracker will reject these writes.",
                        mapping.source, mapping.target, from, to
                    ),
                    behavior: title.clone(),
                });
            }
        }
    }

    if config.source.project == config.target.project
        && config.source.view.class() == config.target.view.class()
    {
        warnings.push(LintWarning {
            level: WarnLevel::Warning,
            message: format!(
                "Source and target resolve to the same view of project '{}'.",
                config.source.project
            ),
            behavior: title.clone(),
        });
    }

    // Each endpoint filters with its own expression; a shared one is
    // often a leftover from editing only half the pair.
    if !config.source.find.trim().is_empty() && config.source.find == config.target.find {
        warnings.push(LintWarning {
            level: WarnLevel::Info,
            message: format!(
                "Source and target use the same find expression '{}'.",
                config.source.find
            ),
            behavior: title.clone(),
        });
    }
}
