//! Reveal controller - how many matches are visible.
//!
//! ```text
//!            trigger (not exhausted)
//!   ┌──────┐ ─────────────────────▶ ┌─────────┐
//!   │ Idle │                        │ Loading │
//!   └──────┘ ◀───────────────────── └─────────┘
//!      │       advance completes         │
//!      │ advance reaches total           │ advance reaches total
//!      ▼                                 ▼
//!   ┌───────────────────────────────────────┐
//!   │               Exhausted               │ ── reset ──▶ Idle
//!   └───────────────────────────────────────┘
//! ```
//!
//! Every reset bumps a generation counter. A reveal that started before the
//! reset carries the old generation and is dropped when it completes.

use tracing::{debug, trace};

use crate::types::{RevealSnapshot, RevealState};

/// Cursor over a query result's visible window.
#[derive(Debug, Clone)]
pub struct RevealController {
    page_size: usize,
    step: usize,
    visible_count: usize,
    total_matched: usize,
    state: RevealState,
    generation: u64,
}

impl RevealController {
    /// Create a controller already reset for `total_matched` results.
    pub fn new(page_size: usize, step: usize, total_matched: usize) -> Self {
        let mut controller = Self {
            page_size,
            step,
            visible_count: 0,
            total_matched: 0,
            state: RevealState::Idle,
            generation: 0,
        };
        controller.reset(total_matched);
        controller
    }

    /// Restart from the first page for a new result of `total_matched` records.
    ///
    /// Called on every filter change. Any in-flight load is abandoned.
    pub fn reset(&mut self, total_matched: usize) {
        self.generation = self.generation.wrapping_add(1);
        self.total_matched = total_matched;
        self.visible_count = self.page_size.min(total_matched);
        self.state = if self.is_exhausted() {
            RevealState::Exhausted
        } else {
            RevealState::Idle
        };

        debug!(
            generation = self.generation,
            total_matched,
            visible_count = self.visible_count,
            "Reset reveal window"
        );
    }

    /// Grow the window by `step`, never past the total. No-op once exhausted.
    pub fn advance(&mut self, step: usize) -> usize {
        if self.is_exhausted() {
            trace!("Advance ignored, reveal exhausted");
            self.state = RevealState::Exhausted;
            return self.visible_count;
        }

        self.visible_count = self
            .visible_count
            .saturating_add(step)
            .min(self.total_matched);
        if self.is_exhausted() {
            self.state = RevealState::Exhausted;
        }

        trace!(visible_count = self.visible_count, "Advanced reveal window");
        self.visible_count
    }

    /// Advance by the configured step.
    pub fn advance_default(&mut self) -> usize {
        self.advance(self.step)
    }

    pub fn is_exhausted(&self) -> bool {
        self.visible_count >= self.total_matched
    }

    /// Enter Loading if a reveal may start.
    ///
    /// Returns false while another load is in flight or once exhausted.
    pub fn begin_loading(&mut self) -> bool {
        match self.state {
            RevealState::Idle if !self.is_exhausted() => {
                self.state = RevealState::Loading;
                true
            }
            _ => false,
        }
    }

    /// Finish a load started under `generation`.
    ///
    /// Returns `None` when a reset happened since, or no load was in flight.
    pub fn complete_loading(&mut self, generation: u64) -> Option<usize> {
        if generation != self.generation || self.state != RevealState::Loading {
            debug!(
                started = generation,
                current = self.generation,
                "Dropping stale reveal"
            );
            return None;
        }

        self.state = RevealState::Idle;
        Some(self.advance_default())
    }

    /// Abandon a load started under `generation` without advancing.
    ///
    /// Returns false when a reset happened since, or no load was in flight.
    pub fn cancel_loading(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.state != RevealState::Loading {
            return false;
        }

        self.state = RevealState::Idle;
        debug!(generation, "Cancelled reveal");
        true
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn total_matched(&self) -> usize {
        self.total_matched
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn snapshot(&self) -> RevealSnapshot {
        RevealSnapshot {
            visible_count: self.visible_count,
            total_matched: self.total_matched,
            state: self.state,
            is_exhausted: self.is_exhausted(),
            is_empty: self.total_matched == 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_advances_exhaust_24() {
        let mut reveal = RevealController::new(12, 6, 24);
        assert_eq!(reveal.visible_count(), 12);
        assert!(!reveal.is_exhausted());

        reveal.advance(6);
        assert_eq!(reveal.advance(6), 24);
        assert!(reveal.is_exhausted());
        assert_eq!(reveal.state(), RevealState::Exhausted);
    }

    #[test]
    fn test_advance_clamps_and_is_idempotent() {
        let mut reveal = RevealController::new(12, 6, 15);
        assert_eq!(reveal.advance(6), 15);
        assert_eq!(reveal.advance(6), 15);
        assert_eq!(reveal.advance_default(), 15);
    }

    #[test]
    fn test_reset_exhausted_when_small() {
        for total in [0, 5, 12, 13, 40] {
            let mut reveal = RevealController::new(12, 6, 40);
            reveal.advance(6);
            reveal.reset(total);
            assert_eq!(reveal.is_exhausted(), total <= 12, "total {total}");
            assert!(reveal.visible_count() <= total);
        }
    }

    #[test]
    fn test_loading_debounced() {
        let mut reveal = RevealController::new(12, 6, 30);
        assert!(reveal.begin_loading());
        assert!(!reveal.begin_loading());

        let generation = reveal.generation();
        assert_eq!(reveal.complete_loading(generation), Some(18));
        assert_eq!(reveal.state(), RevealState::Idle);
    }

    #[test]
    fn test_reset_drops_pending_load() {
        let mut reveal = RevealController::new(12, 6, 30);
        assert!(reveal.begin_loading());
        let started = reveal.generation();

        reveal.reset(20);
        assert_eq!(reveal.state(), RevealState::Idle);
        assert_eq!(reveal.complete_loading(started), None);
        assert_eq!(reveal.visible_count(), 12);
    }

    #[test]
    fn test_old_completion_leaves_new_load_alone() {
        let mut reveal = RevealController::new(12, 6, 30);
        assert!(reveal.begin_loading());
        let first = reveal.generation();

        reveal.reset(30);
        assert!(reveal.begin_loading());
        let second = reveal.generation();
        assert_ne!(first, second);

        assert_eq!(reveal.complete_loading(first), None);
        assert!(!reveal.cancel_loading(first));
        assert_eq!(reveal.state(), RevealState::Loading);
        assert_eq!(reveal.visible_count(), 12);

        assert_eq!(reveal.complete_loading(second), Some(18));
    }

    #[test]
    fn test_cancel_returns_to_idle() {
        let mut reveal = RevealController::new(12, 6, 30);
        assert!(reveal.begin_loading());
        let generation = reveal.generation();

        assert!(reveal.cancel_loading(generation));
        assert_eq!(reveal.state(), RevealState::Idle);
        assert_eq!(reveal.visible_count(), 12);
        assert!(!reveal.cancel_loading(generation));
        assert!(reveal.begin_loading());
    }

    #[test]
    fn test_exhausted_is_terminal_until_reset() {
        let mut reveal = RevealController::new(12, 6, 12);
        assert_eq!(reveal.state(), RevealState::Exhausted);
        assert!(!reveal.begin_loading());

        reveal.reset(30);
        assert_eq!(reveal.state(), RevealState::Idle);
        assert!(reveal.begin_loading());
    }

    #[test]
    fn test_snapshot_empty() {
        let reveal = RevealController::new(12, 6, 0);
        let snapshot = reveal.snapshot();
        assert!(snapshot.is_empty);
        assert!(snapshot.is_exhausted);
        assert_eq!(snapshot.visible_count, 0);
    }
}
