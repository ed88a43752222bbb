//! Builtin fields and view classes
//!
//! Every project exposes the same three item collections and the same
//! fixed set of system-defined fields. Each builtin field has a declared
//! [`ValueKind`] known without any lookup.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value::ValueKind;

/// The three concrete item collections a project exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewClass {
    /// The product backlog.
    AgileBacklog,
    /// The bug tracker.
    BugTracker,
    /// The schedule (planned work).
    Schedule,
}

impl fmt::Display for ViewClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewClass::AgileBacklog => write!(f, "agile-backlog"),
            ViewClass::BugTracker => write!(f, "bug-tracker"),
            ViewClass::Schedule => write!(f, "schedule"),
        }
    }
}

/// One of the fixed system-defined fields every item carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuiltinField {
    Risk,
    Priority,
    EstimatedDays,
    Category,
    Points,
    Status,
    Confidence,
    Hyperlink,
    Name,
    WorkRemaining,
}

impl BuiltinField {
    /// The declared value kind of this field.
    pub fn kind(self) -> ValueKind {
        match self {
            BuiltinField::Risk
            | BuiltinField::Priority
            | BuiltinField::Category
            | BuiltinField::Status
            | BuiltinField::Confidence => ValueKind::Enumerated,
            BuiltinField::EstimatedDays | BuiltinField::Points | BuiltinField::WorkRemaining => {
                ValueKind::Numeric
            }
            BuiltinField::Name => ValueKind::Text,
            BuiltinField::Hyperlink => ValueKind::Link,
        }
    }

    /// Parse a kebab-case field name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "risk" => Some(Self::Risk),
            "priority" => Some(Self::Priority),
            "estimated-days" => Some(Self::EstimatedDays),
            "category" => Some(Self::Category),
            "points" => Some(Self::Points),
            "status" => Some(Self::Status),
            "confidence" => Some(Self::Confidence),
            "hyperlink" => Some(Self::Hyperlink),
            "name" => Some(Self::Name),
            "work-remaining" => Some(Self::WorkRemaining),
            _ => None,
        }
    }

    /// List all valid field names.
    pub fn all_names() -> &'static [&'static str] {
        &[
            "risk",
            "priority",
            "estimated-days",
            "category",
            "points",
            "status",
            "confidence",
            "hyperlink",
            "name",
            "work-remaining",
        ]
    }
}

impl fmt::Display for BuiltinField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuiltinField::Risk => write!(f, "risk"),
            BuiltinField::Priority => write!(f, "priority"),
            BuiltinField::EstimatedDays => write!(f, "estimated-days"),
            BuiltinField::Category => write!(f, "category"),
            BuiltinField::Points => write!(f, "points"),
            BuiltinField::Status => write!(f, "status"),
            BuiltinField::Confidence => write!(f, "confidence"),
            BuiltinField::Hyperlink => write!(f, "hyperlink"),
            BuiltinField::Name => write!(f, "name"),
            BuiltinField::WorkRemaining => write!(f, "work-remaining"),
        }
    }
}
