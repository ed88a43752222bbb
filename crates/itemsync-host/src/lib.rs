//! Host-facing tracker interfaces for itemsync
//!
//! This crate is the layer-0 seam between the synchronization engine and
//! the project-tracking host application. It defines:
//!
//! - opaque ids ([`ProjectId`], [`ViewId`], [`ItemId`], [`ColumnHandle`])
//! - the value model ([`Value`], [`ValueKind`], [`CustomValue`])
//! - the fixed set of system-defined fields ([`BuiltinField`])
//! - the [`TrackerHost`] trait, the narrow interface through which the
//!   engine reads and writes work items
//!
//! itemsync never owns items or views; it only queries and mutates them
//! through a [`TrackerHost`] supplied by the owning application.

pub mod error;
pub mod field;
pub mod host;
pub mod id;
pub mod value;

pub use error::{Error, Result};
pub use field::{BuiltinField, ViewClass};
pub use host::TrackerHost;
pub use id::{ColumnHandle, ItemId, ProjectId, ViewId};
pub use value::{CustomColumn, CustomValue, Value, ValueKind};
