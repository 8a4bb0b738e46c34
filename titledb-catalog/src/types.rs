//! Catalog data model: one aggregate per base title.

use std::collections::BTreeMap;

use serde::Serialize;
use titledb_core::{IdError, TitleAttributes, TitleId};

/// Release history of a title's updates: version number to release date.
pub type VersionHistory = BTreeMap<u64, String>;

/// Everything known about one base title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TitleAggregate {
    /// The base title's own record. `None` until a base record is seen; an
    /// aggregate can exist with only updates or DLC.
    pub attributes: Option<TitleAttributes>,
    /// Update history, set once an update record is seen. An update record
    /// with no published history yields an empty map.
    pub updates: Option<VersionHistory>,
    /// DLC records keyed by their own (not base) title ID.
    pub dlc: BTreeMap<String, TitleAttributes>,
}

impl TitleAggregate {
    /// Highest published update version and its release date.
    pub fn latest_update(&self) -> Option<(u64, &str)> {
        self.updates
            .as_ref()?
            .iter()
            .next_back()
            .map(|(v, date)| (*v, date.as_str()))
    }

    /// Name to show for this title. Falls back to the first DLC's name when
    /// the base record is missing.
    pub fn display_name(&self) -> Option<&str> {
        self.attributes
            .as_ref()
            .map(|a| a.name.as_str())
            .filter(|n| !n.is_empty())
            .or_else(|| {
                self.dlc
                    .values()
                    .map(|a| a.name.as_str())
                    .find(|n| !n.is_empty())
            })
    }
}

/// Summary counts for a built catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogStats {
    /// Distinct base keys.
    pub titles: usize,
    /// Aggregates that have a base record.
    pub with_base: usize,
    /// Aggregates that have an update record.
    pub with_updates: usize,
    /// DLC records across all aggregates.
    pub dlc: usize,
    /// Records skipped because their ID could not be decoded.
    pub rejected: usize,
}

/// Title aggregates keyed by base key.
///
/// Built once from a complete pair of inputs by
/// [`build_catalog`](crate::build_catalog); the only mutation afterwards is
/// [`merge`](Self::merge) of a disjoint shard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    titles: BTreeMap<String, TitleAggregate>,
    rejected: BTreeMap<String, IdError>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the aggregate for `base_key`, inserting an empty one first if
    /// there is none.
    pub(crate) fn entry_mut(&mut self, base_key: &str) -> &mut TitleAggregate {
        self.titles.entry(base_key.to_string()).or_default()
    }

    pub(crate) fn reject(&mut self, id: String, err: IdError) {
        self.rejected.insert(id, err);
    }

    pub fn get(&self, base_key: &str) -> Option<&TitleAggregate> {
        self.titles.get(base_key)
    }

    /// Decode any title ID (base, update or DLC) and return the aggregate
    /// it belongs to.
    pub fn lookup(&self, id: &str) -> Result<Option<&TitleAggregate>, IdError> {
        let id = TitleId::parse(id)?;
        Ok(self.get(id.base_key()))
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Aggregates in base key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TitleAggregate)> {
        self.titles.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Records that were skipped, keyed by their lowercased ID.
    pub fn rejected(&self) -> &BTreeMap<String, IdError> {
        &self.rejected
    }

    pub fn stats(&self) -> CatalogStats {
        let mut stats = CatalogStats {
            titles: self.titles.len(),
            rejected: self.rejected.len(),
            ..CatalogStats::default()
        };
        for agg in self.titles.values() {
            if agg.attributes.is_some() {
                stats.with_base += 1;
            }
            if agg.updates.is_some() {
                stats.with_updates += 1;
            }
            stats.dlc += agg.dlc.len();
        }
        stats
    }

    /// Fold a catalog built from another shard of the input into this one.
    ///
    /// Shards are expected to be partitioned by base key. Where both sides
    /// share a key, each field `other` populates replaces ours and DLC maps
    /// are unioned.
    pub fn merge(&mut self, other: Catalog) {
        for (key, agg) in other.titles {
            let dst = self.entry_mut(&key);
            if agg.attributes.is_some() {
                dst.attributes = agg.attributes;
            }
            if agg.updates.is_some() {
                dst.updates = agg.updates;
            }
            dst.dlc.extend(agg.dlc);
        }
        self.rejected.extend(other.rejected);
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = (&'a String, &'a TitleAggregate);
    type IntoIter = std::collections::btree_map::Iter<'a, String, TitleAggregate>;

    fn into_iter(self) -> Self::IntoIter {
        self.titles.iter()
    }
}
