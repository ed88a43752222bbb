//! The narrow interface to the owning tracker application
//!
//! The engine treats the host as a flat service: every call addresses
//! projects, views, items and columns by opaque id. All calls are
//! synchronous; the host delivers change notifications and drives the
//! engine from a single thread (see the behavior surface in
//! `itemsync-core`).

use crate::error::Result;
use crate::field::{BuiltinField, ViewClass};
use crate::id::{ColumnHandle, ItemId, ProjectId, ViewId};
use crate::value::{CustomColumn, CustomValue, Value};

/// Trait the owning application implements to expose its item store.
///
/// Mutating calls take `&self`; hosts are expected to manage their own
/// interior mutability. The engine never retains ids across host restarts
/// and never frees anything; item and view lifetimes belong to the host.
pub trait TrackerHost: Send + Sync {
    /// Look up a project by its display name.
    fn find_project(&self, name: &str) -> Option<ProjectId>;

    /// Get the view of the given class within a project.
    ///
    /// Every project exposes all three view classes.
    fn view(&self, project: ProjectId, class: ViewClass) -> Result<ViewId>;

    /// Query a view for items satisfying a filter expression.
    ///
    /// The filter syntax is owned by the host; an empty filter matches
    /// every item. The returned order is the collection's natural
    /// iteration order and is stable across identical queries.
    fn find_items(&self, view: ViewId, filter: &str) -> Result<Vec<ItemId>>;

    /// Look up a custom column by name on a view.
    ///
    /// Returns `None` when the view defines no such column.
    fn custom_column(&self, view: ViewId, name: &str) -> Result<Option<CustomColumn>>;

    /// Read a custom field of an item.
    ///
    /// A field that was never set reads as empty internal and display
    /// strings tagged with the column's kind.
    fn custom_value(&self, item: ItemId, column: ColumnHandle) -> Result<CustomValue>;

    /// Write a custom field from an end-user string.
    ///
    /// The host interprets the string according to the column's own type
    /// and may reject it.
    fn set_custom_text(&self, item: ItemId, column: ColumnHandle, text: &str) -> Result<()>;

    /// Write a custom field's raw internal representation verbatim.
    ///
    /// Only meaningful between columns of the same kind; the host may
    /// reject an internal value that is invalid for the column (e.g. an
    /// enumerated id the column does not define).
    fn set_custom_internal(&self, item: ItemId, column: ColumnHandle, internal: &str)
    -> Result<()>;

    /// Read a builtin field in its native representation.
    fn builtin_value(&self, item: ItemId, field: BuiltinField) -> Result<Value>;

    /// Write a builtin field from a native value.
    ///
    /// The host rejects values whose kind does not match the field.
    fn set_builtin_value(&self, item: ItemId, field: BuiltinField, value: Value) -> Result<()>;

    /// The set of items linked to the given item, in the host's order.
    ///
    /// Link relations are symmetric from the engine's point of view:
    /// incoming and outgoing links both appear here.
    fn linked_items(&self, item: ItemId) -> Result<Vec<ItemId>>;
}
