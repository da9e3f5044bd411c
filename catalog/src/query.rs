//! Query engine: applies a filter across a store.
//!
//! A linear scan in store order. Results are never re-sorted, and the same
//! store and filter always produce the same result.

use tracing::debug;

use crate::filter::{matches_difficulty, matches_reward, matches_search, matches_tags};
use crate::store::BountyStore;
use crate::types::{BountyRecord, DifficultyPolicy, FilterState};

/// Ordered matches for one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult<'a> {
    records: Vec<&'a BountyRecord>,
}

impl<'a> QueryResult<'a> {
    /// Number of records that matched.
    pub fn total_matched(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All matches in store order.
    pub fn records(&self) -> &[&'a BountyRecord] {
        &self.records
    }

    /// The first `count` matches, or all of them if fewer.
    pub fn visible(&self, count: usize) -> &[&'a BountyRecord] {
        &self.records[..count.min(self.records.len())]
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a BountyRecord> + '_ {
        self.records.iter().copied()
    }

    pub fn ids(&self) -> Vec<&'a str> {
        self.records.iter().map(|r| r.id.as_str()).collect()
    }
}

/// Anything that can answer a filter query over a catalog.
///
/// The linear [`QueryEngine`] is enough for tens of records; a larger catalog
/// can put an indexed implementation behind the same trait.
pub trait CatalogQuery<'s> {
    fn run(&self, filter: &FilterState) -> QueryResult<'s>;
}

/// Linear-scan engine over a borrowed store.
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'s> {
    store: &'s BountyStore,
    policy: DifficultyPolicy,
}

impl<'s> QueryEngine<'s> {
    pub fn new(store: &'s BountyStore) -> Self {
        Self::with_policy(store, DifficultyPolicy::default())
    }

    pub fn with_policy(store: &'s BountyStore, policy: DifficultyPolicy) -> Self {
        Self { store, policy }
    }

    pub fn policy(&self) -> DifficultyPolicy {
        self.policy
    }

    /// Count matches without collecting them.
    pub fn count(&self, filter: &FilterState) -> usize {
        let needle = filter.search.to_lowercase();
        self.store
            .iter()
            .filter(|r| self.accepts(r, filter, &needle))
            .count()
    }

    fn accepts(&self, record: &BountyRecord, filter: &FilterState, needle: &str) -> bool {
        matches_reward(record, filter)
            && matches_tags(record, filter)
            && matches_difficulty(record, filter, self.policy)
            && matches_search(record, needle)
    }
}

impl<'s> CatalogQuery<'s> for QueryEngine<'s> {
    fn run(&self, filter: &FilterState) -> QueryResult<'s> {
        let needle = filter.search.to_lowercase();
        let records: Vec<&'s BountyRecord> = self
            .store
            .iter()
            .filter(|r| self.accepts(r, filter, &needle))
            .collect();

        debug!(
            scanned = self.store.len(),
            matched = records.len(),
            policy = ?self.policy,
            "Ran catalog query"
        );

        QueryResult { records }
    }
}

/// Query `store` with difficulty enforced.
pub fn query<'a>(store: &'a BountyStore, filter: &FilterState) -> QueryResult<'a> {
    query_with(store, filter, DifficultyPolicy::Enforce)
}

/// Query `store` under an explicit difficulty policy.
pub fn query_with<'a>(
    store: &'a BountyStore,
    filter: &FilterState,
    policy: DifficultyPolicy,
) -> QueryResult<'a> {
    QueryEngine::with_policy(store, policy).run(filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::matches;
    use crate::types::Difficulty;

    fn store() -> BountyStore {
        BountyStore::new(vec![
            BountyRecord::new("1", "Cache tree").with_reward(250).with_tags(["performance"]),
            BountyRecord::new("2", "Offline docs").with_reward(400).with_tags(["pwa"]),
            BountyRecord::new("3", "Leak fix")
                .with_reward(350)
                .with_difficulty(Difficulty::Expert),
            BountyRecord::new("4", "Dark mode").with_reward(300).with_tags(["react"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_query_preserves_store_order() {
        let store = store();
        let result = query(&store, &FilterState::new().with_reward_range(250, 350));
        assert_eq!(result.ids(), vec!["1", "3", "4"]);
        assert_eq!(result.total_matched(), 3);
    }

    #[test]
    fn test_total_matches_predicate_count() {
        let store = store();
        let filter = FilterState::new().with_search("o");
        let expected = store.iter().filter(|r| matches(r, &filter)).count();
        assert_eq!(query(&store, &filter).total_matched(), expected);
        assert_eq!(QueryEngine::new(&store).count(&filter), expected);
    }

    #[test]
    fn test_engine_policy_ignore() {
        let store = store();
        let filter = FilterState::new().with_difficulty(Difficulty::Expert);
        assert_eq!(QueryEngine::new(&store).run(&filter).ids(), vec!["3"]);

        let lenient = QueryEngine::with_policy(&store, DifficultyPolicy::Ignore);
        assert_eq!(lenient.run(&filter).total_matched(), 4);
    }

    #[test]
    fn test_free_functions_match_engine() {
        let store = store();
        let filter = FilterState::new()
            .with_reward_range(300, 400)
            .with_difficulty(Difficulty::Expert);

        assert_eq!(query(&store, &filter), QueryEngine::new(&store).run(&filter));
        assert_eq!(
            query_with(&store, &filter, DifficultyPolicy::Ignore),
            QueryEngine::with_policy(&store, DifficultyPolicy::Ignore).run(&filter)
        );
    }

    #[test]
    fn test_result_outlives_engine() {
        let store = store();
        let filter = FilterState::new().with_tag("react");
        let result = {
            let engine = QueryEngine::new(&store);
            engine.run(&filter)
        };
        assert_eq!(result.ids(), vec!["4"]);
    }

    #[test]
    fn test_visible_window_clamped() {
        let store = store();
        let result = query(&store, &FilterState::new());
        assert_eq!(result.visible(2).len(), 2);
        assert_eq!(result.visible(99).len(), 4);
        assert!(result.visible(0).is_empty());
    }

    #[test]
    fn test_empty_result_is_valid() {
        let store = store();
        let result = query(&store, &FilterState::new().with_search("nothing like this"));
        assert!(result.is_empty());
        assert_eq!(result.total_matched(), 0);

        let empty = BountyStore::default();
        assert_eq!(query(&empty, &FilterState::new()).total_matched(), 0);
    }
}
