//! Core types for the bounty catalog.
//!
//! With the `typescript` feature enabled, these types can be exported to TypeScript
//! using ts-rs so the presentation layer renders the same shapes.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[cfg(feature = "typescript")]
use ts_rs::TS;

use crate::error::CatalogError;

/// Lower bound of the reward slider.
pub const REWARD_FLOOR: u32 = 0;

/// Upper bound of the reward slider.
pub const REWARD_CEILING: u32 = 1000;

/// How hard a bounty is to complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Difficulty {
    /// Display label, as shown on bounty cards
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
        }
    }

    /// All difficulties, easiest first
    pub fn all() -> [Self; 4] {
        [Self::Beginner, Self::Intermediate, Self::Advanced, Self::Expert]
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CatalogError::UnknownDifficulty(s.to_string()))
    }
}

/// Lifecycle status of a bounty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum BountyStatus {
    #[default]
    Open,
    InProgress,
    Completed,
}

impl BountyStatus {
    /// Display label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for BountyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BountyStatus {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "in progress" | "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(CatalogError::UnknownStatus(s.to_string())),
        }
    }
}

/// Who posted a bounty. Display only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct Author {
    /// Handle shown next to the bounty
    pub name: String,
    /// Avatar image URL
    pub avatar_url: String,
}

impl Author {
    pub fn new(name: impl Into<String>, avatar_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            avatar_url: avatar_url.into(),
        }
    }
}

/// A single bounty in the catalog.
///
/// Records are immutable once placed in a [`BountyStore`](crate::BountyStore);
/// the `with_*` setters exist for building them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct BountyRecord {
    /// Unique, stable identifier
    pub id: String,
    /// Short title
    pub title: String,
    /// Longer free-text description
    pub description: String,
    /// Tags in display order
    pub tags: Vec<String>,
    /// Reward in points
    pub reward: u32,
    /// Submission deadline
    pub deadline: NaiveDate,
    /// Expected difficulty
    pub difficulty: Difficulty,
    /// Current status
    pub status: BountyStatus,
    /// Who posted it
    pub author: Author,
}

impl BountyRecord {
    /// Create a record with empty text, no tags and zero reward.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            tags: Vec::new(),
            reward: 0,
            deadline: NaiveDate::default(),
            difficulty: Difficulty::default(),
            status: BountyStatus::default(),
            author: Author::default(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set tags. Duplicates are dropped, first occurrence wins.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.clear();
        for tag in tags {
            let tag = tag.into();
            if !self.tags.contains(&tag) {
                self.tags.push(tag);
            }
        }
        self
    }

    pub fn with_reward(mut self, reward: u32) -> Self {
        self.reward = reward;
        self
    }

    pub fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = deadline;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_status(mut self, status: BountyStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_author(mut self, author: Author) -> Self {
        self.author = author;
        self
    }

    /// Deadline formatted like "Oct 15, 2024".
    pub fn deadline_label(&self) -> String {
        self.deadline.format("%b %-d, %Y").to_string()
    }

    /// Whether the bounty carries `tag` (exact match).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Difficulty constraint chosen in the filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum DifficultyFilter {
    /// No constraint
    #[default]
    Any,
    /// Only bounties of exactly this difficulty
    Only(Difficulty),
}

impl DifficultyFilter {
    /// Whether `difficulty` passes this constraint.
    pub fn accepts(&self, difficulty: Difficulty) -> bool {
        match self {
            Self::Any => true,
            Self::Only(wanted) => *wanted == difficulty,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Any => "Any",
            Self::Only(d) => d.as_str(),
        }
    }
}

impl From<Difficulty> for DifficultyFilter {
    fn from(difficulty: Difficulty) -> Self {
        Self::Only(difficulty)
    }
}

impl FromStr for DifficultyFilter {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("any") {
            return Ok(Self::Any);
        }
        s.parse::<Difficulty>().map(Self::Only)
    }
}

/// Whether the difficulty constraint takes part in matching.
///
/// The original explore page collected a difficulty choice but never applied
/// it. `Ignore` reproduces that behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyPolicy {
    #[default]
    Enforce,
    Ignore,
}

/// Closed reward interval `[min, max]`.
///
/// Always normalised so that `min <= max`, whichever way it was built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(from = "RewardBounds")]
pub struct RewardRange {
    min: u32,
    max: u32,
}

#[derive(Deserialize)]
struct RewardBounds {
    min: u32,
    max: u32,
}

impl From<RewardBounds> for RewardRange {
    fn from(bounds: RewardBounds) -> Self {
        Self::new(bounds.min, bounds.max)
    }
}

impl RewardRange {
    /// Build a range from two bounds given in either order.
    pub fn new(a: u32, b: u32) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Inclusive at both ends.
    pub fn contains(&self, reward: u32) -> bool {
        self.min <= reward && reward <= self.max
    }
}

impl Default for RewardRange {
    fn default() -> Self {
        Self::new(REWARD_FLOOR, REWARD_CEILING)
    }
}

/// The user's current constraints on the visible bounty set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(default)]
pub struct FilterState {
    /// Free text, matched case-insensitively as a substring
    pub search: String,
    /// Difficulty constraint
    pub difficulty: DifficultyFilter,
    /// Inclusive reward interval
    pub reward_range: RewardRange,
    /// Required tags, any one of which must be present (empty = no constraint)
    pub tags: Vec<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_difficulty(mut self, difficulty: impl Into<DifficultyFilter>) -> Self {
        self.difficulty = difficulty.into();
        self
    }

    /// Set the reward range; bounds may be given in either order.
    pub fn with_reward_range(mut self, min: u32, max: u32) -> Self {
        self.reward_range = RewardRange::new(min, max);
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.clear();
        for tag in tags {
            self.add_tag(tag);
        }
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.add_tag(tag);
        self
    }

    fn add_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    /// Select `tag` if absent, deselect it if present.
    pub fn toggle_tag(&mut self, tag: &str) {
        if let Some(pos) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(pos);
        } else {
            self.tags.push(tag.to_string());
        }
    }

    pub fn clear_tags(&mut self) {
        self.tags.clear();
    }

    /// The state after "Clear all".
    pub fn cleared() -> Self {
        Self::default()
    }

    /// Whether anything narrows the set compared to the default state.
    pub fn has_active_filters(&self) -> bool {
        !self.search.is_empty()
            || self.difficulty != DifficultyFilter::Any
            || self.reward_range.min() > REWARD_FLOOR
            || self.reward_range.max() < REWARD_CEILING
            || !self.tags.is_empty()
    }
}
