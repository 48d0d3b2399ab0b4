//! Farm lot directory.
//!
//! The farm management service publishes every lot as an entry with its
//! numeric id, display name and owning farm. Surveys refer to lots by name
//! or by id, so lookups accept either.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::field::GroupKey;

/// Resolves survey lot labels to lot identifiers for one farm.
pub trait LotDirectory {
    /// Identifier of the lot labelled `lot`, if the farm owns it.
    fn resolve(&self, lot: &str) -> Option<u64>;

    fn contains(&self, lot: &str) -> bool {
        self.resolve(lot).is_some()
    }
}

/// A lot as published by the directory service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotEntry {
    pub id: u64,
    #[serde(rename = "nombre", alias = "name")]
    pub name: String,
    #[serde(alias = "farm_id")]
    pub finca_id: u64,
}

/// In-memory directory of the lots owned by a single farm.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FarmLots {
    farm_id: u64,
    by_name: BTreeMap<String, u64>,
    ids: BTreeSet<u64>,
}

impl FarmLots {
    /// Keep the entries that belong to `farm_id`.
    pub fn from_entries<I>(farm_id: u64, entries: I) -> Self
    where
        I: IntoIterator<Item = LotEntry>,
    {
        let mut lots = Self {
            farm_id,
            ..Self::default()
        };
        for entry in entries.into_iter().filter(|entry| entry.finca_id == farm_id) {
            if let Some(key) = GroupKey::from_raw(&entry.name) {
                lots.by_name.entry(key.to_string()).or_insert(entry.id);
            }
            lots.ids.insert(entry.id);
        }
        lots
    }

    pub fn farm_id(&self) -> u64 {
        self.farm_id
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl LotDirectory for FarmLots {
    fn resolve(&self, lot: &str) -> Option<u64> {
        let key = GroupKey::from_raw(lot)?.to_string();
        if let Some(id) = self.by_name.get(&key) {
            return Some(*id);
        }
        key.parse::<u64>().ok().filter(|id| self.ids.contains(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u64, name: &str, finca_id: u64) -> LotEntry {
        LotEntry {
            id,
            name: name.to_string(),
            finca_id,
        }
    }

    #[test]
    fn keeps_only_the_selected_farm() {
        let lots = FarmLots::from_entries(
            4,
            vec![entry(10, "1", 4), entry(11, "2", 4), entry(12, "1", 5)],
        );
        assert_eq!(lots.farm_id(), 4);
        assert_eq!(lots.len(), 2);
        assert_eq!(lots.resolve("1"), Some(10));
        assert_eq!(lots.resolve("2"), Some(11));
        assert!(!lots.contains("3"));
    }

    #[test]
    fn resolves_by_name_then_by_id() {
        let lots = FarmLots::from_entries(4, vec![entry(10, "Norte", 4), entry(11, "2.0", 4)]);
        assert_eq!(lots.resolve("Norte"), Some(10));
        assert_eq!(lots.resolve("2"), Some(11));
        assert_eq!(lots.resolve("10"), Some(10));
        assert_eq!(lots.resolve("12"), None);
        assert_eq!(lots.resolve(""), None);
    }

    #[test]
    fn entries_deserialize_from_service_shape() {
        let entry: LotEntry =
            serde_json::from_str(r#"{"id": 3, "nombre": "Lote 3", "finca_id": 9}"#)
                .expect("deserialize entry");
        assert_eq!(entry.name, "Lote 3");
        assert_eq!(entry.finca_id, 9);
    }
}
