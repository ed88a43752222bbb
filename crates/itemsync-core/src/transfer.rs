//! Value transfer between a matched pair of items
//!
//! The conversion path is decided entirely by the two resolved column
//! kinds, never by inspecting a runtime value:
//!
//! 1. Custom to custom of the same kind copies the raw internal
//!    representation, preserving numeric precision and enumerated
//!    identity.
//! 2. A numeric source written into any other custom column renders with
//!    exactly one fractional digit, locale-invariant, rounding half away
//!    from zero.
//! 3. Other sources written into a custom column use their display text.
//! 4. Builtin targets take the native value unconverted; the host rejects
//!    kind mismatches.

use itemsync_host::{ItemId, TrackerHost, Value, ValueKind};

use crate::column::ColumnRef;
use crate::error::{Error, Result};
use crate::mapping::Mapping;

/// Render a number with exactly one fractional digit.
///
/// Locale-invariant (always a `.` separator), rounding half away from
/// zero: `3.45` renders `"3.5"` and `-0.25` renders `"-0.3"`.
pub fn format_one_decimal(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    format!("{:.1}", rounded)
}

/// Copy one mapped column from a source item to a target item.
///
/// A failed write leaves earlier writes in place; the caller records the
/// failure and moves on to the next mapping.
pub fn transfer(
    host: &dyn TrackerHost,
    source_item: ItemId,
    target_item: ItemId,
    mapping: &Mapping,
) -> Result<()> {
    match (&mapping.source, &mapping.target) {
        (ColumnRef::Custom { column: from, .. }, ColumnRef::Custom { column: to, .. })
            if from.kind == to.kind =>
        {
            let value = host.custom_value(source_item, from.handle)?;
            host.set_custom_internal(target_item, to.handle, &value.internal)?;
        }
        (source, ColumnRef::Custom { column: to, .. }) => {
            let text = render_text(host, source_item, source)?;
            host.set_custom_text(target_item, to.handle, &text)?;
        }
        (source, ColumnRef::Builtin(field)) => {
            let value = read_native(host, source_item, source)?;
            host.set_builtin_value(target_item, *field, value)?;
        }
    }
    Ok(())
}

/// End-user string for writing the source value into a custom column.
fn render_text(host: &dyn TrackerHost, item: ItemId, source: &ColumnRef) -> Result<String> {
    match source {
        ColumnRef::Custom { column, .. } => {
            let value = host.custom_value(item, column.handle)?;
            if column.kind != ValueKind::Numeric {
                return Ok(value.display);
            }
            let internal = value.internal.trim();
            if internal.is_empty() {
                // A never-set numeric source clears the target.
                return Ok(String::new());
            }
            let number: f64 = internal.parse().map_err(|_| {
                Error::Host(itemsync_host::Error::malformed(format!(
                    "numeric internal value {:?} does not parse",
                    value.internal
                )))
            })?;
            Ok(format_one_decimal(number))
        }
        ColumnRef::Builtin(field) => {
            let value = host.builtin_value(item, *field)?;
            Ok(match value {
                Value::Number(n) => format_one_decimal(n),
                other => other.to_string(),
            })
        }
    }
}

/// Native value for writing the source into a builtin field.
fn read_native(host: &dyn TrackerHost, item: ItemId, source: &ColumnRef) -> Result<Value> {
    match source {
        ColumnRef::Custom { column, .. } => {
            let value = host.custom_value(item, column.handle)?;
            Ok(value.to_value()?)
        }
        ColumnRef::Builtin(field) => Ok(host.builtin_value(item, *field)?),
    }
}
