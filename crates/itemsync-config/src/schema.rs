//! Copy behavior schema - loaded from behavior TOML files
//!
//! A behavior names two endpoints (project plus view, with an optional
//! find expression) and the column mappings copied from one to the other.
//!
//! # Example TOML
//!
//! ```toml
//! [[behavior]]
//! title = "points to schedule"
//!
//! [behavior.source]
//! project = "Apollo"
//! view = "backlog"
//! find = "tag:ready"
//!
//! [behavior.target]
//! project = "Apollo"
//! view = "scheduled"
//!
//! [[behavior.mapping]]
//! source = { custom = "Points" }
//! target = { builtin = "work-remaining" }
//! ```

use serde::{Deserialize, Serialize};

use itemsync_host::{BuiltinField, ValueKind, ViewClass};

use crate::{Error, Result};

/// View surface of a project, as written in behavior files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    /// Agile planning screen of the schedule.
    Agile,
    /// Classic scheduled-task screen.
    Scheduled,
    /// Bug tracker.
    Bugs,
    /// Product backlog.
    Backlog,
}

impl ViewKind {
    /// The host view class this kind resolves against.
    ///
    /// `agile` and `scheduled` are two screens over the same schedule
    /// view, so both resolve to [`ViewClass::Schedule`].
    pub fn class(self) -> ViewClass {
        match self {
            ViewKind::Agile | ViewKind::Scheduled => ViewClass::Schedule,
            ViewKind::Bugs => ViewClass::BugTracker,
            ViewKind::Backlog => ViewClass::AgileBacklog,
        }
    }
}

impl std::fmt::Display for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewKind::Agile => write!(f, "agile"),
            ViewKind::Scheduled => write!(f, "scheduled"),
            ViewKind::Bugs => write!(f, "bugs"),
            ViewKind::Backlog => write!(f, "backlog"),
        }
    }
}

/// One side of a column mapping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnSpec {
    /// A user-defined column, looked up by name on the resolved view.
    Custom(String),
    /// A builtin work item field.
    Builtin(BuiltinField),
}

impl ColumnSpec {
    /// Value kind known without consulting the tracker.
    ///
    /// Builtin fields have a fixed kind; a custom column's kind is only
    /// known once the column is resolved against a live view.
    pub fn kind(&self) -> Option<ValueKind> {
        match self {
            ColumnSpec::Custom(_) => None,
            ColumnSpec::Builtin(field) => Some(field.kind()),
        }
    }
}

impl std::fmt::Display for ColumnSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnSpec::Custom(name) => write!(f, "custom:{name}"),
            ColumnSpec::Builtin(field) => write!(f, "builtin:{field}"),
        }
    }
}

/// A single source-to-target column pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingSpec {
    /// Column read on the source view.
    pub source: ColumnSpec,
    /// Column written on the target view.
    pub target: ColumnSpec,
}

/// One endpoint of a copy behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Project name, matched exactly against the tracker.
    pub project: String,
    /// Which view of the project to address.
    pub view: ViewKind,
    /// Find expression; empty matches every item in the view.
    #[serde(default)]
    pub find: String,
}

/// A complete copy behavior: where to read, where to write, and which
/// columns travel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyConfig {
    /// Display title; derived from the endpoints when omitted.
    #[serde(default)]
    pub title: Option<String>,
    /// Endpoint items are read from.
    pub source: EndpointConfig,
    /// Endpoint items are written to.
    pub target: EndpointConfig,
    /// Column pairs copied on every sync pass.
    #[serde(default, rename = "mapping")]
    pub mappings: Vec<MappingSpec>,
}

impl CopyConfig {
    /// Title shown in logs and CLI output.
    pub fn effective_title(&self) -> String {
        match &self.title {
            Some(title) if !title.trim().is_empty() => title.clone(),
            _ => format!(
                "copy {}/{} -> {}/{}",
                self.source.project, self.source.view, self.target.project, self.target.view
            ),
        }
    }

    /// Check the behavior for hard errors.
    ///
    /// A behavior that fails validation is never handed to the sync
    /// engine; lint-level concerns live in [`crate::lint`].
    pub fn validate(&self) -> Result<()> {
        if self.source.project.trim().is_empty() {
            return Err(self.invalid("source project name is empty"));
        }
        if self.target.project.trim().is_empty() {
            return Err(self.invalid("target project name is empty"));
        }
        if self.mappings.is_empty() {
            return Err(self.invalid("no column mappings configured"));
        }
        for (index, mapping) in self.mappings.iter().enumerate() {
            for spec in [&mapping.source, &mapping.target] {
                if let ColumnSpec::Custom(name) = spec {
                    if name.trim().is_empty() {
                        return Err(
                            self.invalid(format!("mapping {} has an empty custom column name", index))
                        );
                    }
                }
            }
        }
        Ok(())
    }

    fn invalid(&self, message: impl Into<String>) -> Error {
        Error::Invalid {
            behavior: self.effective_title(),
            message: message.into(),
        }
    }
}
