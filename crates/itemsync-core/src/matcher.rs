//! Link-based matching of target items to their sources

use std::collections::HashSet;

use itemsync_host::{ItemId, TrackerHost};

use crate::error::Result;

/// Pair each target item with the first source item that links it.
///
/// Sources are considered in the order the source query returned them,
/// so a target linked by several sources gets the first one and the rest
/// are ignored. Targets with no linking source are omitted; that is not
/// an error. Link sets are fetched once per source item.
pub fn match_items(
    host: &dyn TrackerHost,
    targets: &[ItemId],
    sources: &[ItemId],
) -> Result<Vec<(ItemId, ItemId)>> {
    let mut links: Vec<(ItemId, HashSet<ItemId>)> = Vec::with_capacity(sources.len());
    for source in sources {
        let linked = host.linked_items(*source)?;
        links.push((*source, linked.into_iter().collect()));
    }

    let mut pairs = Vec::with_capacity(targets.len());
    for target in targets {
        if let Some((source, _)) = links.iter().find(|(_, linked)| linked.contains(target)) {
            pairs.push((*target, *source));
        }
    }
    Ok(pairs)
}
