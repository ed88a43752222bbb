//! One synchronization pass
//!
//! A pass queries both endpoints, matches target items to the sources
//! that link them, and copies every mapped column for each matched pair.
//! Passes are stateless; with unchanged source data a re-run writes the
//! same values again.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use itemsync_host::{TrackerHost, ViewId};

use crate::error::Result;
use crate::mapping::Mapping;
use crate::matcher::match_items;
use crate::transfer::transfer;

/// Everything a pass needs, resolved once at behavior initialization.
#[derive(Debug, Clone)]
pub struct SyncPlan {
    /// View items are read from.
    pub source_view: ViewId,
    /// View items are written to.
    pub target_view: ViewId,
    /// Filter for the source query.
    pub source_find: String,
    /// Filter for the target query.
    pub target_find: String,
    /// Column pairs, in declaration order.
    pub mappings: Vec<Mapping>,
}

/// Serializable summary of one pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassReport {
    /// When the pass started.
    pub started_at: DateTime<Utc>,
    /// When the pass finished.
    pub finished_at: DateTime<Utc>,
    /// Items the target query returned.
    pub targets: usize,
    /// Items the source query returned.
    pub sources: usize,
    /// Target items that had a linking source.
    pub matched: usize,
    /// Column values written.
    pub written: usize,
    /// Failed transfers, one message each.
    pub errors: Vec<String>,
}

impl SyncPlan {
    /// Run one pass.
    ///
    /// Each endpoint is queried with its own configured filter. A failed
    /// transfer is logged at `warn`, recorded in the report, and the pass
    /// continues with the remaining mappings and pairs; nothing already
    /// written is rolled back. Query and matching failures abort the
    /// pass.
    pub fn run(&self, host: &dyn TrackerHost) -> Result<PassReport> {
        let started_at = Utc::now();

        let targets = host.find_items(self.target_view, &self.target_find)?;
        let sources = host.find_items(self.source_view, &self.source_find)?;
        let pairs = match_items(host, &targets, &sources)?;

        let mut written = 0;
        let mut errors = Vec::new();
        for (target, source) in &pairs {
            for mapping in &self.mappings {
                match transfer(host, *source, *target, mapping) {
                    Ok(()) => written += 1,
                    Err(e) => {
                        tracing::warn!(
                            "Transfer {} -> {} failed: {}",
                            mapping.source,
                            mapping.target,
                            e
                        );
                        errors.push(format!("{} -> {}: {}", mapping.source, mapping.target, e));
                    }
                }
            }
        }

        Ok(PassReport {
            started_at,
            finished_at: Utc::now(),
            targets: targets.len(),
            sources: sources.len(),
            matched: pairs.len(),
            written,
            errors,
        })
    }
}
