//! Immutable, ordered store of bounty records.
//!
//! Built once per session and passed to whoever needs it. Record order is the
//! order given at construction and is never changed.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{CatalogError, Result};
use crate::types::BountyRecord;

/// Read-only collection of bounties with an id index.
#[derive(Debug, Clone, Default)]
pub struct BountyStore {
    records: Vec<BountyRecord>,
    by_id: HashMap<String, usize>,
}

impl BountyStore {
    /// Build a store, rejecting duplicate ids.
    pub fn new(records: Vec<BountyRecord>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            if by_id.insert(record.id.clone(), index).is_some() {
                return Err(CatalogError::DuplicateId(record.id.clone()));
            }
        }

        debug!(records = records.len(), "Built bounty store");
        Ok(Self { records, by_id })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in original order.
    pub fn records(&self) -> &[BountyRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BountyRecord> {
        self.records.iter()
    }

    /// Look up a bounty by id.
    pub fn get(&self, id: &str) -> Option<&BountyRecord> {
        self.by_id.get(id).map(|&index| &self.records[index])
    }

    /// Up to `limit` other bounties, in store order, for a detail page.
    pub fn related(&self, id: &str, limit: usize) -> Vec<&BountyRecord> {
        self.records
            .iter()
            .filter(|r| r.id != id)
            .take(limit)
            .collect()
    }

    /// Every distinct tag in first-seen order.
    pub fn tag_vocabulary(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for tag in self.records.iter().flat_map(|r| r.tags.iter()) {
            if !seen.contains(&tag.as_str()) {
                seen.push(tag);
            }
        }
        seen
    }
}

impl<'a> IntoIterator for &'a BountyStore {
    type Item = &'a BountyRecord;
    type IntoIter = std::slice::Iter<'a, BountyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, tags: &[&str]) -> BountyRecord {
        BountyRecord::new(id, format!("Bounty {id}")).with_tags(tags.iter().copied())
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = BountyStore::new(vec![record("1", &[]), record("2", &[]), record("1", &[])]);
        assert_eq!(result.unwrap_err(), CatalogError::DuplicateId("1".to_string()));
    }

    #[test]
    fn test_get_and_order() {
        let store = BountyStore::new(vec![record("b", &[]), record("a", &[])]).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[0].id, "b");
        assert_eq!(store.get("a").map(|r| r.title.as_str()), Some("Bounty a"));
        assert!(store.get("zzz").is_none());
    }

    #[test]
    fn test_related_skips_self() {
        let store = BountyStore::new((1..=6).map(|i| record(&i.to_string(), &[])).collect()).unwrap();
        let related: Vec<&str> = store.related("2", 4).iter().map(|r| r.id.as_str()).collect();
        assert_eq!(related, vec!["1", "3", "4", "5"]);
    }

    #[test]
    fn test_tag_vocabulary_first_seen() {
        let store = BountyStore::new(vec![
            record("1", &["react", "ssr"]),
            record("2", &["ssr", "cli"]),
        ])
        .unwrap();
        assert_eq!(store.tag_vocabulary(), vec!["react", "ssr", "cli"]);
    }

    #[test]
    fn test_empty_store() {
        let store = BountyStore::new(Vec::new()).unwrap();
        assert!(store.is_empty());
        assert!(store.tag_vocabulary().is_empty());
    }
}
