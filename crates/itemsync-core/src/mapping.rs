//! Resolved column mappings

use itemsync_config::MappingSpec;
use itemsync_host::{TrackerHost, ViewId};

use crate::column::ColumnRef;
use crate::error::Result;

/// A mapping with both sides resolved against their views.
///
/// Mappings keep their declaration order through resolution; a pass
/// applies them in that order for every matched pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Mapping {
    /// Column read on the source view.
    pub source: ColumnRef,
    /// Column written on the target view.
    pub target: ColumnRef,
}

impl Mapping {
    /// Resolve a configured mapping: the source column against the
    /// source view, the target column against the target view.
    pub fn resolve(
        host: &dyn TrackerHost,
        source_view: ViewId,
        target_view: ViewId,
        spec: &MappingSpec,
    ) -> Result<Self> {
        Ok(Self {
            source: ColumnRef::resolve(host, source_view, &spec.source)?,
            target: ColumnRef::resolve(host, target_view, &spec.target)?,
        })
    }
}
