//! Value model shared between the engine and the host
//!
//! Every column read carries an explicit [`ValueKind`] tag decided when the
//! column was resolved, so the engine never inspects runtime types to pick
//! a conversion path. Custom columns additionally expose their raw internal
//! representation, which is host-global: copying it between two columns of
//! the same kind preserves numeric precision and enumerated identity.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::id::ColumnHandle;

/// The declared kind of a column's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueKind {
    /// Floating-point quantity (estimates, points, remaining work).
    Numeric,
    /// Free text.
    Text,
    /// One selection out of a fixed choice list.
    Enumerated,
    /// A hyperlink.
    Link,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Numeric => write!(f, "numeric"),
            ValueKind::Text => write!(f, "text"),
            ValueKind::Enumerated => write!(f, "enumerated"),
            ValueKind::Link => write!(f, "link"),
        }
    }
}

/// A native field value as produced by the typed builtin accessors.
///
/// Also serves as the intermediate representation when a custom value is
/// written to a builtin column. `Choice` carries the user-facing label of
/// an enumerated selection; the host maps it back to its own identity.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
    Choice(String),
    Link(String),
}

impl Value {
    /// The kind this value belongs to.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Number(_) => ValueKind::Numeric,
            Value::Text(_) => ValueKind::Text,
            Value::Choice(_) => ValueKind::Enumerated,
            Value::Link(_) => ValueKind::Link,
        }
    }
}

impl fmt::Display for Value {
    /// Default textual rendering. Numbers use the shortest round-trip
    /// form; callers that need the fixed one-decimal presentation format
    /// numbers themselves.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) | Value::Choice(s) | Value::Link(s) => write!(f, "{}", s),
        }
    }
}

/// A bound custom column: the opaque handle plus its declared value kind.
///
/// Returned by [`TrackerHost::custom_column`](crate::TrackerHost::custom_column);
/// immutable once resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomColumn {
    pub handle: ColumnHandle,
    pub kind: ValueKind,
}

/// One custom field read: kind tag, raw internal representation, and the
/// user-facing display string.
///
/// Internal encodings by kind:
/// - `Numeric`: a full-precision decimal string (`"3.45"`)
/// - `Text`: the text itself (internal == display)
/// - `Enumerated`: the stable choice id; `display` is the label
/// - `Link`: the URL (internal == display)
///
/// A field that was never set reads as empty internal and display strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomValue {
    pub kind: ValueKind,
    pub internal: String,
    pub display: String,
}

impl CustomValue {
    /// Build a numeric custom value. Both representations use the shortest
    /// string that round-trips the exact `f64`.
    pub fn numeric(n: f64) -> Self {
        let repr = format!("{}", n);
        Self {
            kind: ValueKind::Numeric,
            internal: repr.clone(),
            display: repr,
        }
    }

    /// Build a text custom value.
    pub fn text(s: impl Into<String>) -> Self {
        let s = s.into();
        Self {
            kind: ValueKind::Text,
            internal: s.clone(),
            display: s,
        }
    }

    /// Build an enumerated custom value from a choice id and its label.
    pub fn choice(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            kind: ValueKind::Enumerated,
            internal: id.into(),
            display: label.into(),
        }
    }

    /// Build a link custom value.
    pub fn link(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            kind: ValueKind::Link,
            internal: url.clone(),
            display: url,
        }
    }

    /// Convert to the native [`Value`] representation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedValue`] if a numeric internal string does
    /// not parse (including the never-set empty value).
    pub fn to_value(&self) -> Result<Value> {
        match self.kind {
            ValueKind::Numeric => {
                self.internal.trim().parse::<f64>().map(Value::Number).map_err(|_| {
                    Error::malformed(format!(
                        "numeric internal value {:?} does not parse",
                        self.internal
                    ))
                })
            }
            ValueKind::Text => Ok(Value::Text(self.display.clone())),
            ValueKind::Enumerated => Ok(Value::Choice(self.display.clone())),
            ValueKind::Link => Ok(Value::Link(self.internal.clone())),
        }
    }
}
