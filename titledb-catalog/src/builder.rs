//! Grouping of flat title records into per-title aggregates.

use std::cmp::Ordering;
use std::collections::HashMap;

use titledb_core::{
    TitleAttributes, TitleRole, base_id_for_key, classify, normalize_release_date,
};

use crate::types::{Catalog, VersionHistory};

/// Build a catalog from title metadata records and update histories.
///
/// Each record's ID decides which aggregate it lands in and which slot it
/// fills, so visiting `metadata` in any order produces the same catalog.
/// Records whose ID cannot be decoded are skipped and listed in
/// [`Catalog::rejected`].
///
/// IDs that differ only in case land in the same slot. Of those, the one
/// whose raw key is already lowercase wins, then the lexicographically
/// smallest raw key. The same rule picks between case-only duplicates in
/// `update_histories`.
///
/// `update_histories` is keyed by base title ID (`...000`); an update record
/// picks up the history of its base title, or an empty one if none exists.
pub fn build_catalog<I>(
    metadata: I,
    update_histories: &HashMap<String, VersionHistory>,
) -> Catalog
where
    I: IntoIterator<Item = (String, TitleAttributes)>,
{
    let mut history_entries: Vec<(&String, &VersionHistory)> =
        update_histories.iter().collect();
    history_entries.sort_by(|(a, _), (b, _)| collision_order(a, b));
    // Later inserts overwrite, so the preferred key is inserted last
    let histories: HashMap<String, &VersionHistory> = history_entries
        .into_iter()
        .map(|(id, history)| (id.to_ascii_lowercase(), history))
        .collect();

    let mut records: Vec<(String, TitleAttributes)> = metadata.into_iter().collect();
    records.sort_by(|(a, _), (b, _)| collision_order(a, b));
    let record_count = records.len();

    let mut catalog = Catalog::new();

    for (id, mut attrs) in records {
        let id = id.to_ascii_lowercase();
        attrs.parsed_release_date = normalize_release_date(attrs.release_date);

        let (role, base_key) = match classify(&id) {
            Ok(decoded) => decoded,
            Err(e) => {
                log::warn!("Skipping title record: {}", e);
                catalog.reject(id, e);
                continue;
            }
        };

        let title = catalog.entry_mut(&base_key);
        match role {
            TitleRole::Base => title.attributes = Some(attrs),
            TitleRole::Update => {
                let history = histories
                    .get(&base_id_for_key(&base_key))
                    .map(|h| (*h).clone())
                    .unwrap_or_default();
                title.updates = Some(history);
            }
            TitleRole::Dlc => {
                title.dlc.insert(id, attrs);
            }
        }
    }

    log::debug!(
        "Built catalog: {} records, {} titles, {} rejected",
        record_count,
        catalog.len(),
        catalog.rejected().len(),
    );
    catalog
}

/// Visit order for raw keys: mixed-case keys first, then lowercase keys,
/// each group from largest to smallest. The last visit to a slot wins.
fn collision_order(a: &str, b: &str) -> Ordering {
    is_lowercase(a)
        .cmp(&is_lowercase(b))
        .then_with(|| b.cmp(a))
}

fn is_lowercase(raw: &str) -> bool {
    !raw.bytes().any(|b| b.is_ascii_uppercase())
}
