//! Behavior configuration for itemsync.
//!
//! Copy behaviors are declared in TOML files: each `[[behavior]]` table
//! names a source endpoint, a target endpoint, and the column mappings
//! carried between them. This crate owns the schema, file loading, hard
//! validation, and advisory lint checks.

pub mod error;
pub mod lint;
pub mod loader;
pub mod schema;

pub use error::{Error, Result};
pub use lint::{LintWarning, WarnLevel, lint};
pub use loader::BehaviorFile;
pub use schema::{ColumnSpec, CopyConfig, EndpointConfig, MappingSpec, ViewKind};
