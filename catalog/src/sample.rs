//! Sample catalog used by demos and tests.
//!
//! Records follow a fixed six-entry cycle, so a catalog of `n` records has
//! exactly `n / 6` copies of each pattern when `n` is a multiple of six.

use chrono::NaiveDate;

use crate::store::BountyStore;
use crate::types::{Author, BountyRecord, BountyStatus, Difficulty};

/// Number of records in the default sample catalog.
pub const SAMPLE_SIZE: usize = 24;

const PLACEHOLDER_AVATAR: &str = "/placeholder.svg?height=64&width=64";

const TITLES: [&str; 6] = [
    "Improve repository performance on large file trees",
    "Add offline support to documentation site",
    "Fix memory leak in WebSocket server implementation",
    "Implement dark mode toggling with SSR support",
    "Create GitHub OAuth flow for CLI tool",
    "Reduce bundle size through code splitting optimization",
];

const DESCRIPTIONS: [&str; 6] = [
    "Optimize the file tree traversal algorithm and implement intelligent caching to reduce cold-start times and speed up directory queries in large repositories.",
    "Implement service worker functionality and offline caching strategies to ensure documentation remains accessible without internet connectivity.",
    "Identify and resolve memory leaks in the WebSocket server that cause performance degradation over time with high connection volumes.",
    "Build a comprehensive dark mode system that works seamlessly with server-side rendering and maintains user preferences across sessions.",
    "Design and implement a secure OAuth authentication flow that integrates with GitHub's API for command-line tool authorization.",
    "Analyze bundle composition and implement strategic code splitting to reduce initial load times and improve application performance.",
];

const TAGS: [[&str; 3]; 6] = [
    ["performance", "nodejs", "caching"],
    ["pwa", "service-worker", "offline"],
    ["backend", "websocket", "memory"],
    ["react", "ssr", "theming"],
    ["oauth", "cli", "security"],
    ["bundling", "optimization", "webpack"],
];

const REWARDS: [u32; 6] = [250, 400, 350, 300, 500, 275];

// (month, day) in 2024
const DEADLINES: [(u32, u32); 6] = [(10, 15), (10, 22), (11, 5), (11, 12), (11, 28), (12, 10)];

const DIFFICULTIES: [Difficulty; 6] = [
    Difficulty::Intermediate,
    Difficulty::Advanced,
    Difficulty::Expert,
    Difficulty::Beginner,
    Difficulty::Advanced,
    Difficulty::Intermediate,
];

const STATUSES: [BountyStatus; 6] = [
    BountyStatus::Open,
    BountyStatus::Open,
    BountyStatus::InProgress,
    BountyStatus::Open,
    BountyStatus::Open,
    BountyStatus::Completed,
];

const AUTHORS: [&str; 6] = [
    "alice_dev",
    "bob_maintainer",
    "carol_oss",
    "dave_core",
    "erin_lead",
    "frank_arch",
];

/// Generate `n` sample bounties with ids `"1"..="n"`.
pub fn sample_bounties(n: usize) -> Vec<BountyRecord> {
    (0..n).map(sample_bounty).collect()
}

/// The default 24-record sample store.
pub fn sample_store() -> BountyStore {
    sample_store_of(SAMPLE_SIZE)
}

/// A sample store of `n` records.
pub fn sample_store_of(n: usize) -> BountyStore {
    // ids are generated sequentially, so they are always unique
    BountyStore::new(sample_bounties(n)).unwrap_or_default()
}

fn sample_bounty(index: usize) -> BountyRecord {
    let slot = index % 6;
    let (month, day) = DEADLINES[slot];

    BountyRecord::new((index + 1).to_string(), TITLES[slot])
        .with_description(DESCRIPTIONS[slot])
        .with_tags(TAGS[slot])
        .with_reward(REWARDS[slot])
        .with_deadline(NaiveDate::from_ymd_opt(2024, month, day).unwrap_or_default())
        .with_difficulty(DIFFICULTIES[slot])
        .with_status(STATUSES[slot])
        .with_author(Author::new(AUTHORS[slot], PLACEHOLDER_AVATAR))
}
