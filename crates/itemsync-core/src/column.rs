//! Column resolution
//!
//! Configuration names columns symbolically; the engine works with
//! resolved references. A custom column is looked up once against its
//! view during behavior initialization and never re-resolved, so the
//! unresolved [`ColumnSpec`] and the resolved [`ColumnRef`] are distinct
//! types and a transfer can only ever see a resolved column.

use std::fmt;

use itemsync_config::ColumnSpec;
use itemsync_host::{BuiltinField, CustomColumn, TrackerHost, ValueKind, ViewId};

use crate::error::{Error, Result};

/// A column reference resolved against a concrete view.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnRef {
    /// A custom column bound to its view.
    Custom {
        /// Configured name, kept for messages.
        name: String,
        /// The bound handle and declared kind.
        column: CustomColumn,
    },
    /// A builtin field; needs no lookup.
    Builtin(BuiltinField),
}

impl ColumnRef {
    /// Resolve a configured column against a view.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ColumnNotFound`] when the view defines no custom
    /// column with the configured name. This is a configuration error,
    /// fatal to behavior initialization.
    pub fn resolve(host: &dyn TrackerHost, view: ViewId, spec: &ColumnSpec) -> Result<Self> {
        match spec {
            ColumnSpec::Custom(name) => {
                let column = host.custom_column(view, name)?.ok_or_else(|| {
                    Error::ColumnNotFound {
                        column: name.clone(),
                    }
                })?;
                Ok(ColumnRef::Custom {
                    name: name.clone(),
                    column,
                })
            }
            ColumnSpec::Builtin(field) => Ok(ColumnRef::Builtin(*field)),
        }
    }

    /// The declared value kind of the resolved column.
    pub fn kind(&self) -> ValueKind {
        match self {
            ColumnRef::Custom { column, .. } => column.kind,
            ColumnRef::Builtin(field) => field.kind(),
        }
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnRef::Custom { name, .. } => write!(f, "custom:{name}"),
            ColumnRef::Builtin(field) => write!(f, "builtin:{field}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itemsync_host::ViewClass;
    use itemsync_test_utils::tracker::MemTracker;
    use pretty_assertions::assert_eq;

    #[test]
    fn resolves_custom_column_by_name() {
        let tracker = MemTracker::new();
        let project = tracker.add_project("Apollo");
        let view = tracker.view(project, ViewClass::AgileBacklog).unwrap();
        let points = tracker.add_custom_column(view, "Points", ValueKind::Numeric);

        let spec = ColumnSpec::Custom("Points".to_string());
        let resolved = ColumnRef::resolve(&tracker, view, &spec).unwrap();

        assert_eq!(
            resolved,
            ColumnRef::Custom {
                name: "Points".to_string(),
                column: points,
            }
        );
        assert_eq!(resolved.kind(), ValueKind::Numeric);
    }

    #[test]
    fn missing_custom_column_is_fatal() {
        let tracker = MemTracker::new();
        let project = tracker.add_project("Apollo");
        let view = tracker.view(project, ViewClass::AgileBacklog).unwrap();

        let spec = ColumnSpec::Custom("Points".to_string());
        let err = ColumnRef::resolve(&tracker, view, &spec).unwrap_err();
        assert!(matches!(err, Error::ColumnNotFound { column } if column == "Points"));
    }

    #[test]
    fn builtin_needs_no_lookup() {
        let tracker = MemTracker::new();
        let project = tracker.add_project("Apollo");
        let view = tracker.view(project, ViewClass::Schedule).unwrap();

        let spec = ColumnSpec::Builtin(BuiltinField::WorkRemaining);
        let resolved = ColumnRef::resolve(&tracker, view, &spec).unwrap();
        assert_eq!(resolved, ColumnRef::Builtin(BuiltinField::WorkRemaining));
        assert_eq!(resolved.kind(), ValueKind::Numeric);
    }

    #[test]
    fn display_names_the_column() {
        let column = ColumnRef::Builtin(BuiltinField::EstimatedDays);
        assert_eq!(column.to_string(), "builtin:estimated-days");
    }
}
