//! [`MemTracker`] builder for sync engine test scenarios.
//!
//! Models the parts of a tracker the engine can observe: projects with
//! their three views, items with builtin and custom fields, item links,
//! and a find query over tags. Setup methods panic on misuse; the
//! [`TrackerHost`] impl returns proper errors, since rejecting bad engine
//! calls is exactly what tests probe.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use itemsync_host::{
    BuiltinField, ColumnHandle, CustomColumn, CustomValue, Error, ItemId, ProjectId, Result,
    TrackerHost, Value, ValueKind, ViewClass, ViewId,
};

#[derive(Default)]
struct State {
    projects: Vec<Project>,
    views: HashMap<ViewId, View>,
    items: HashMap<ItemId, Item>,
    columns: HashMap<ColumnHandle, Column>,
    find_log: Vec<(ViewId, String)>,
}

struct Project {
    id: ProjectId,
    name: String,
    views: HashMap<ViewClass, ViewId>,
}

#[derive(Default)]
struct View {
    items: Vec<ItemId>,
    columns: Vec<ColumnHandle>,
}

struct Item {
    name: String,
    tags: Vec<String>,
    builtins: HashMap<BuiltinField, Value>,
    customs: HashMap<ColumnHandle, Stored>,
    links: Vec<ItemId>,
}

#[derive(Clone, Default)]
struct Stored {
    internal: String,
    display: String,
}

struct Column {
    name: String,
    kind: ValueKind,
    choices: Vec<Choice>,
}

struct Choice {
    id: String,
    label: String,
}

/// An in-memory [`TrackerHost`] with helper methods for test setup and
/// assertion.
///
/// # Example
///
/// ```rust
/// use itemsync_host::{TrackerHost, ValueKind, ViewClass};
/// use itemsync_test_utils::tracker::MemTracker;
///
/// let tracker = MemTracker::new();
/// let project = tracker.add_project("Apollo");
/// let backlog = tracker.view(project, ViewClass::AgileBacklog).unwrap();
/// let points = tracker.add_custom_column(backlog, "Points", ValueKind::Numeric);
/// let story = tracker.add_item(backlog, "Checkout flow");
/// tracker.set_number(story, points, 3.45);
/// ```
pub struct MemTracker {
    state: Mutex<State>,
}

impl Default for MemTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl MemTracker {
    /// Create an empty tracker with no projects.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    /// Create a project together with its three standard views.
    pub fn add_project(&self, name: &str) -> ProjectId {
        let mut state = self.state();
        let id = ProjectId::new();
        let mut views = HashMap::new();
        for class in [
            ViewClass::AgileBacklog,
            ViewClass::BugTracker,
            ViewClass::Schedule,
        ] {
            let view_id = ViewId::new();
            state.views.insert(view_id, View::default());
            views.insert(class, view_id);
        }
        state.projects.push(Project {
            id,
            name: name.to_string(),
            views,
        });
        id
    }

    /// Add an item to a view. The name backs the `name` builtin field.
    ///
    /// Items keep their insertion order in find results.
    pub fn add_item(&self, view: ViewId, name: &str) -> ItemId {
        let mut state = self.state();
        let id = ItemId::new();
        state
            .views
            .get_mut(&view)
            .expect("MemTracker::add_item: unknown view")
            .items
            .push(id);
        state.items.insert(
            id,
            Item {
                name: name.to_string(),
                tags: Vec::new(),
                builtins: HashMap::new(),
                customs: HashMap::new(),
                links: Vec::new(),
            },
        );
        id
    }

    /// Tag an item so find expressions can select it.
    pub fn tag_item(&self, item: ItemId, tag: &str) {
        let mut state = self.state();
        state
            .items
            .get_mut(&item)
            .expect("MemTracker::tag_item: unknown item")
            .tags
            .push(tag.to_string());
    }

    /// Define a custom column on a view.
    pub fn add_custom_column(&self, view: ViewId, name: &str, kind: ValueKind) -> CustomColumn {
        let mut state = self.state();
        let handle = ColumnHandle::new();
        state
            .views
            .get_mut(&view)
            .expect("MemTracker::add_custom_column: unknown view")
            .columns
            .push(handle);
        state.columns.insert(
            handle,
            Column {
                name: name.to_string(),
                kind,
                choices: Vec::new(),
            },
        );
        CustomColumn { handle, kind }
    }

    /// Register a choice on an enumerated column.
    pub fn add_choice(&self, column: CustomColumn, id: &str, label: &str) {
        let mut state = self.state();
        state
            .columns
            .get_mut(&column.handle)
            .expect("MemTracker::add_choice: unknown column")
            .choices
            .push(Choice {
                id: id.to_string(),
                label: label.to_string(),
            });
    }

    /// Link two items. Links are symmetric and keep creation order.
    pub fn link(&self, a: ItemId, b: ItemId) {
        let mut state = self.state();
        assert!(
            state.items.contains_key(&a) && state.items.contains_key(&b),
            "MemTracker::link: unknown item"
        );
        state.items.get_mut(&a).unwrap().links.push(b);
        state.items.get_mut(&b).unwrap().links.push(a);
    }

    /// Seed a numeric custom field at full precision.
    pub fn set_number(&self, item: ItemId, column: CustomColumn, value: f64) {
        let repr = format!("{}", value);
        self.seed(item, column, ValueKind::Numeric, &repr, &repr);
    }

    /// Seed a text custom field.
    pub fn set_text(&self, item: ItemId, column: CustomColumn, text: &str) {
        self.seed(item, column, ValueKind::Text, text, text);
    }

    /// Seed an enumerated custom field by choice id.
    pub fn set_choice(&self, item: ItemId, column: CustomColumn, choice_id: &str) {
        let label = {
            let state = self.state();
            let record = state
                .columns
                .get(&column.handle)
                .expect("MemTracker::set_choice: unknown column");
            record
                .choices
                .iter()
                .find(|c| c.id == choice_id)
                .unwrap_or_else(|| panic!("MemTracker::set_choice: unknown choice id '{choice_id}'"))
                .label
                .clone()
        };
        self.seed(item, column, ValueKind::Enumerated, choice_id, &label);
    }

    /// Seed a link custom field.
    pub fn set_url(&self, item: ItemId, column: CustomColumn, url: &str) {
        self.seed(item, column, ValueKind::Link, url, url);
    }

    fn seed(&self, item: ItemId, column: CustomColumn, kind: ValueKind, internal: &str, display: &str) {
        assert_eq!(
            column.kind, kind,
            "MemTracker: seeding a {kind} value into a {} column",
            column.kind
        );
        let mut state = self.state();
        state
            .items
            .get_mut(&item)
            .expect("MemTracker: unknown item")
            .customs
            .insert(
                column.handle,
                Stored {
                    internal: internal.to_string(),
                    display: display.to_string(),
                },
            );
    }

    /// Raw internal representation of a custom field; `""` when never set.
    pub fn custom_internal(&self, item: ItemId, column: CustomColumn) -> String {
        self.state()
            .items
            .get(&item)
            .expect("MemTracker::custom_internal: unknown item")
            .customs
            .get(&column.handle)
            .map(|s| s.internal.clone())
            .unwrap_or_default()
    }

    /// Display string of a custom field; `""` when never set.
    pub fn custom_display(&self, item: ItemId, column: CustomColumn) -> String {
        self.state()
            .items
            .get(&item)
            .expect("MemTracker::custom_display: unknown item")
            .customs
            .get(&column.handle)
            .map(|s| s.display.clone())
            .unwrap_or_default()
    }

    /// Current name of an item, as the `name` builtin reads it.
    pub fn item_name(&self, item: ItemId) -> String {
        self.state()
            .items
            .get(&item)
            .expect("MemTracker::item_name: unknown item")
            .name
            .clone()
    }

    /// Every `find_items` call seen so far, in call order.
    pub fn find_log(&self) -> Vec<(ViewId, String)> {
        self.state().find_log.clone()
    }
}

fn default_builtin(field: BuiltinField) -> Value {
    match field.kind() {
        ValueKind::Numeric => Value::Number(0.0),
        ValueKind::Text => Value::Text(String::new()),
        ValueKind::Enumerated => Value::Choice(String::new()),
        ValueKind::Link => Value::Link(String::new()),
    }
}

impl TrackerHost for MemTracker {
    fn find_project(&self, name: &str) -> Option<ProjectId> {
        self.state()
            .projects
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.id)
    }

    fn view(&self, project: ProjectId, class: ViewClass) -> Result<ViewId> {
        let state = self.state();
        let record = state
            .projects
            .iter()
            .find(|p| p.id == project)
            .ok_or(Error::UnknownProject { id: project })?;
        let view = record
            .views
            .get(&class)
            .copied()
            .expect("MemTracker: every project carries all three views");
        Ok(view)
    }

    fn find_items(&self, view: ViewId, filter: &str) -> Result<Vec<ItemId>> {
        let mut state = self.state();
        state.find_log.push((view, filter.to_string()));
        let record = state.views.get(&view).ok_or(Error::UnknownView { id: view })?;
        let ids = record
            .items
            .iter()
            .copied()
            .filter(|id| filter.is_empty() || state.items[id].tags.iter().any(|t| t == filter))
            .collect();
        Ok(ids)
    }

    fn custom_column(&self, view: ViewId, name: &str) -> Result<Option<CustomColumn>> {
        let state = self.state();
        let record = state.views.get(&view).ok_or(Error::UnknownView { id: view })?;
        for handle in &record.columns {
            let column = &state.columns[handle];
            if column.name == name {
                return Ok(Some(CustomColumn {
                    handle: *handle,
                    kind: column.kind,
                }));
            }
        }
        Ok(None)
    }

    fn custom_value(&self, item: ItemId, column: ColumnHandle) -> Result<CustomValue> {
        let state = self.state();
        let record = state.items.get(&item).ok_or(Error::UnknownItem { id: item })?;
        let kind = state
            .columns
            .get(&column)
            .ok_or(Error::UnknownColumn { id: column })?
            .kind;
        let stored = record.customs.get(&column).cloned().unwrap_or_default();
        Ok(CustomValue {
            kind,
            internal: stored.internal,
            display: stored.display,
        })
    }

    fn set_custom_text(&self, item: ItemId, column: ColumnHandle, text: &str) -> Result<()> {
        let mut state = self.state();
        let col = state
            .columns
            .get(&column)
            .ok_or(Error::UnknownColumn { id: column })?;
        let stored = match col.kind {
            ValueKind::Numeric => {
                if text.trim().is_empty() {
                    Stored::default()
                } else {
                    let parsed: f64 = text
                        .trim()
                        .parse()
                        .map_err(|_| Error::rejected(format!("'{text}' is not a number")))?;
                    let repr = format!("{}", parsed);
                    Stored {
                        internal: repr.clone(),
                        display: repr,
                    }
                }
            }
            ValueKind::Text | ValueKind::Link => Stored {
                internal: text.to_string(),
                display: text.to_string(),
            },
            ValueKind::Enumerated => {
                if text.is_empty() {
                    Stored::default()
                } else {
                    let choice = col.choices.iter().find(|c| c.label == text).ok_or_else(|| {
                        Error::rejected(format!("'{text}' is not a choice of the column"))
                    })?;
                    Stored {
                        internal: choice.id.clone(),
                        display: choice.label.clone(),
                    }
                }
            }
        };
        let record = state.items.get_mut(&item).ok_or(Error::UnknownItem { id: item })?;
        record.customs.insert(column, stored);
        Ok(())
    }

    fn set_custom_internal(&self, item: ItemId, column: ColumnHandle, internal: &str) -> Result<()> {
        let mut state = self.state();
        let col = state
            .columns
            .get(&column)
            .ok_or(Error::UnknownColumn { id: column })?;
        let stored = match col.kind {
            ValueKind::Numeric => {
                if internal.is_empty() {
                    Stored::default()
                } else {
                    // Keep the caller's exact digits; only check they parse.
                    internal.parse::<f64>().map_err(|_| {
                        Error::rejected(format!("internal value '{internal}' is not numeric"))
                    })?;
                    Stored {
                        internal: internal.to_string(),
                        display: internal.to_string(),
                    }
                }
            }
            ValueKind::Text | ValueKind::Link => Stored {
                internal: internal.to_string(),
                display: internal.to_string(),
            },
            ValueKind::Enumerated => {
                if internal.is_empty() {
                    Stored::default()
                } else {
                    let choice = col.choices.iter().find(|c| c.id == internal).ok_or_else(|| {
                        Error::rejected(format!("choice id '{internal}' is not defined on the column"))
                    })?;
                    Stored {
                        internal: choice.id.clone(),
                        display: choice.label.clone(),
                    }
                }
            }
        };
        let record = state.items.get_mut(&item).ok_or(Error::UnknownItem { id: item })?;
        record.customs.insert(column, stored);
        Ok(())
    }

    fn builtin_value(&self, item: ItemId, field: BuiltinField) -> Result<Value> {
        let state = self.state();
        let record = state.items.get(&item).ok_or(Error::UnknownItem { id: item })?;
        if field == BuiltinField::Name {
            return Ok(Value::Text(record.name.clone()));
        }
        Ok(record
            .builtins
            .get(&field)
            .cloned()
            .unwrap_or_else(|| default_builtin(field)))
    }

    fn set_builtin_value(&self, item: ItemId, field: BuiltinField, value: Value) -> Result<()> {
        if value.kind() != field.kind() {
            return Err(Error::rejected(format!(
                "{} value written to {} field '{field}'",
                value.kind(),
                field.kind()
            )));
        }
        let mut state = self.state();
        let record = state.items.get_mut(&item).ok_or(Error::UnknownItem { id: item })?;
        if field == BuiltinField::Name {
            if let Value::Text(name) = value {
                record.name = name;
            }
            return Ok(());
        }
        record.builtins.insert(field, value);
        Ok(())
    }

    fn linked_items(&self, item: ItemId) -> Result<Vec<ItemId>> {
        let state = self.state();
        let record = state.items.get(&item).ok_or(Error::UnknownItem { id: item })?;
        Ok(record.links.clone())
    }
}
