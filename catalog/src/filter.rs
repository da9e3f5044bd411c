//! Filter predicate evaluation.
//!
//! A record matches when every sub-predicate holds:
//!
//! - **Search**: empty, or a case-insensitive substring of the title, the
//!   description or any tag
//! - **Reward**: inside the inclusive reward range
//! - **Tags**: none selected, or at least one selected tag on the record
//! - **Difficulty**: `Any`, or equal to the record's difficulty
//!
//! All functions here are pure.

use crate::types::{BountyRecord, DifficultyPolicy, FilterState};

/// Evaluate `filter` against `record` with difficulty enforced.
pub fn matches(record: &BountyRecord, filter: &FilterState) -> bool {
    matches_with(record, filter, DifficultyPolicy::Enforce)
}

/// Evaluate `filter` against `record` under an explicit difficulty policy.
pub fn matches_with(record: &BountyRecord, filter: &FilterState, policy: DifficultyPolicy) -> bool {
    matches_reward(record, filter)
        && matches_tags(record, filter)
        && matches_difficulty(record, filter, policy)
        && matches_search(record, &filter.search.to_lowercase())
}

/// Search sub-predicate. `needle` must already be lowercased.
pub fn matches_search(record: &BountyRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    record.title.to_lowercase().contains(needle)
        || record.description.to_lowercase().contains(needle)
        || record.tags.iter().any(|t| t.to_lowercase().contains(needle))
}

pub fn matches_reward(record: &BountyRecord, filter: &FilterState) -> bool {
    filter.reward_range.contains(record.reward)
}

/// OR semantics across selected tags.
pub fn matches_tags(record: &BountyRecord, filter: &FilterState) -> bool {
    filter.tags.is_empty() || filter.tags.iter().any(|t| record.has_tag(t))
}

pub fn matches_difficulty(record: &BountyRecord, filter: &FilterState, policy: DifficultyPolicy) -> bool {
    match policy {
        DifficultyPolicy::Enforce => filter.difficulty.accepts(record.difficulty),
        DifficultyPolicy::Ignore => true,
    }
}
