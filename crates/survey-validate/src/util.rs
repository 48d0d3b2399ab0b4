//! Grouping helpers shared by the checks.

use std::collections::BTreeMap;

use survey_model::{Record, RowNumber};

/// Group row numbers by `key`, skipping records without one.
///
/// Groups iterate in key order; rows within a group keep input order.
pub fn group_rows<'a, K, I, F>(records: I, key: F) -> BTreeMap<K, Vec<RowNumber>>
where
    K: Ord,
    I: IntoIterator<Item = &'a Record>,
    F: Fn(&Record) -> Option<K>,
{
    let mut groups: BTreeMap<K, Vec<RowNumber>> = BTreeMap::new();
    for record in records {
        if let Some(value) = key(record) {
            groups.entry(value).or_default().push(record.row);
        }
    }
    groups
}

/// Groups with more than one row.
pub fn duplicate_groups<K, F>(records: &[Record], key: F) -> BTreeMap<K, Vec<RowNumber>>
where
    K: Ord,
    F: Fn(&Record) -> Option<K>,
{
    let mut groups = group_rows(records, key);
    groups.retain(|_, rows| rows.len() > 1);
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use survey_model::GroupKey;

    fn record(row: RowNumber, lot: &str) -> Record {
        Record::from_cells(row, [lot, "1", "1", "-75", "4"])
    }

    #[test]
    fn groups_by_normalized_key() {
        let records = vec![record(1, "1"), record(2, "B"), record(3, "1.0"), record(4, "")];
        let groups = group_rows(&records, |r| r.lot.group_key());
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[&GroupKey::number(1.0)], vec![1, 3]);
        assert_eq!(groups[&GroupKey::Text("B".to_string())], vec![2]);
    }

    #[test]
    fn duplicate_groups_drop_singletons() {
        let records = vec![record(1, "1"), record(2, "B"), record(3, "01")];
        let groups = duplicate_groups(&records, |r| r.lot.group_key());
        assert_eq!(groups.len(), 1);
        assert_eq!(groups.values().next(), Some(&vec![1, 3]));
    }
}
