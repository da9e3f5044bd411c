//! Contributor leaderboard.

use serde::{Deserialize, Serialize};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// A ranked contributor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct Contributor {
    /// 1-based position, assigned by the leaderboard
    pub rank: u32,
    pub username: String,
    pub points: u32,
    pub badges: Vec<String>,
    pub avatar_url: String,
}

impl Contributor {
    pub fn new(username: impl Into<String>, points: u32) -> Self {
        Self {
            rank: 0,
            username: username.into(),
            points,
            badges: Vec::new(),
            avatar_url: String::new(),
        }
    }

    pub fn with_badges<I, S>(mut self, badges: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.badges = badges.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_avatar(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = avatar_url.into();
        self
    }
}

/// Contributors ordered by points, highest first.
#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    entries: Vec<Contributor>,
}

impl Leaderboard {
    /// Sort by points descending (ties by username) and assign ranks from 1.
    pub fn new(mut contributors: Vec<Contributor>) -> Self {
        contributors.sort_by(|a, b| {
            b.points
                .cmp(&a.points)
                .then_with(|| a.username.cmp(&b.username))
        });
        for (index, contributor) in contributors.iter_mut().enumerate() {
            contributor.rank = index as u32 + 1;
        }
        Self {
            entries: contributors,
        }
    }

    pub fn entries(&self) -> &[Contributor] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The top `n` contributors.
    pub fn top(&self, n: usize) -> &[Contributor] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// The top three.
    pub fn podium(&self) -> &[Contributor] {
        self.top(3)
    }

    pub fn get(&self, username: &str) -> Option<&Contributor> {
        self.entries.iter().find(|c| c.username == username)
    }
}

const USERNAMES: [&str; 10] = [
    "octocat_dev",
    "code_ninja",
    "dev_wizard",
    "bug_hunter",
    "perf_master",
    "ui_architect",
    "cli_hero",
    "docs_guru",
    "net_ops",
    "type_master",
];

const BADGES: [&[&str]; 10] = [
    &["Top 1%", "100+ PRs", "Performance Expert"],
    &["Rising Star", "50+ PRs"],
    &["Bug Squasher", "Security Focus"],
    &["Documentation Hero"],
    &["Performance Guru", "Optimization Master"],
    &["UI/UX Expert"],
    &["CLI Specialist"],
    &["Documentation Master", "Tutorial Creator"],
    &["DevOps Pro"],
    &["TypeScript Expert"],
];

/// Ten sample contributors. Lower ranks show fewer badges.
pub fn sample_leaderboard() -> Leaderboard {
    let contributors = USERNAMES
        .iter()
        .zip(BADGES.iter())
        .enumerate()
        .map(|(i, (username, badges))| {
            let shown = 3usize.saturating_sub(i / 3).max(1);
            Contributor::new(*username, 1250 - i as u32 * 85)
                .with_badges(badges.iter().take(shown).copied())
                .with_avatar("/placeholder.svg?height=64&width=64")
        })
        .collect();
    Leaderboard::new(contributors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_follow_points() {
        let board = Leaderboard::new(vec![
            Contributor::new("low", 10),
            Contributor::new("high", 900),
            Contributor::new("mid", 400),
        ]);
        let names: Vec<&str> = board.entries().iter().map(|c| c.username.as_str()).collect();
        assert_eq!(names, vec!["high", "mid", "low"]);
        assert_eq!(board.get("low").map(|c| c.rank), Some(3));
    }

    #[test]
    fn test_sample_leaderboard() {
        let board = sample_leaderboard();
        assert_eq!(board.len(), 10);
        assert_eq!(board.podium().len(), 3);
        assert_eq!(board.entries()[0].username, "octocat_dev");
        assert_eq!(board.entries()[0].points, 1250);
        assert_eq!(board.entries()[9].points, 485);
        assert_eq!(board.entries()[0].badges.len(), 3);
        assert_eq!(board.entries()[7].badges.len(), 1);
    }

    #[test]
    fn test_top_clamps() {
        let board = Leaderboard::new(vec![Contributor::new("solo", 1)]);
        assert_eq!(board.podium().len(), 1);
        assert!(Leaderboard::default().top(5).is_empty());
    }
}
