//! ExploreSession - filter state, query and reveal for one user session.
//!
//! The session owns the current [`FilterState`] and the [`RevealController`].
//! The store is shared read-only. Every filter change recomputes the match
//! count and restarts pagination from the first page.

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use catalog::{BountyRecord, BountyStore, CatalogQuery, FilterState, QueryEngine};

use crate::config::ExploreConfig;
use crate::delay::RevealDelay;
use crate::reveal::RevealController;
use crate::types::{ExploreError, Result, RevealOutcome, RevealSnapshot, RevealState};

/// Mutable per-session state.
struct SessionState {
    filter: FilterState,
    reveal: RevealController,
}

/// Returns the controller to Idle if a sentinel reveal is dropped mid-load.
///
/// Disarmed once the reveal completes. A reset since the load began makes the
/// cancel a no-op, so a newer load is never touched.
struct LoadingGuard {
    state: Arc<RwLock<SessionState>>,
    generation: u64,
    armed: bool,
}

impl LoadingGuard {
    fn new(state: Arc<RwLock<SessionState>>, generation: u64) -> Self {
        Self {
            state,
            generation,
            armed: true,
        }
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }

        let generation = self.generation;
        match self.state.try_write() {
            Ok(mut state) => {
                state.reveal.cancel_loading(generation);
            }
            Err(_) => {
                // Lock is busy; finish the cancel on the runtime instead
                if let Ok(handle) = tokio::runtime::Handle::try_current() {
                    let state = self.state.clone();
                    handle.spawn(async move {
                        state.write().await.reveal.cancel_loading(generation);
                    });
                } else {
                    warn!(generation, "Reveal dropped outside a runtime, left Loading");
                }
            }
        }
    }
}

/// One user's view of the bounty catalog.
pub struct ExploreSession {
    /// Shared catalog
    store: Arc<BountyStore>,
    /// Configuration
    config: ExploreConfig,
    /// Pause before each sentinel-triggered reveal
    delay: Arc<dyn RevealDelay>,
    /// Filter and reveal cursor
    state: Arc<RwLock<SessionState>>,
}

impl ExploreSession {
    /// Create a session with default configuration.
    pub fn new(store: Arc<BountyStore>) -> Self {
        let config = ExploreConfig::default();
        let delay = config.delay_strategy();
        Self::build(store, config, delay)
    }

    /// Create with custom configuration.
    pub fn with_config(store: Arc<BountyStore>, config: ExploreConfig) -> Result<Self> {
        config.validate()?;
        let delay = config.delay_strategy();
        Ok(Self::build(store, config, delay))
    }

    /// Replace the reveal delay strategy.
    pub fn with_delay(mut self, delay: Arc<dyn RevealDelay>) -> Self {
        self.delay = delay;
        self
    }

    fn build(store: Arc<BountyStore>, config: ExploreConfig, delay: Arc<dyn RevealDelay>) -> Self {
        let filter = FilterState::default();
        let total = QueryEngine::with_policy(&store, config.difficulty_policy).count(&filter);
        let reveal = RevealController::new(config.page_size, config.step, total);

        info!(
            records = store.len(),
            page_size = config.page_size,
            step = config.step,
            "Created explore session"
        );

        Self {
            store,
            config,
            delay,
            state: Arc::new(RwLock::new(SessionState { filter, reveal })),
        }
    }

    pub fn config(&self) -> &ExploreConfig {
        &self.config
    }

    pub fn store(&self) -> &BountyStore {
        &self.store
    }

    fn engine(&self) -> QueryEngine<'_> {
        QueryEngine::with_policy(&self.store, self.config.difficulty_policy)
    }

    /// Current filter.
    pub async fn filter(&self) -> FilterState {
        self.state.read().await.filter.clone()
    }

    /// Apply a new filter and restart pagination.
    pub async fn set_filter(&self, filter: FilterState) -> RevealSnapshot {
        let total = self.engine().count(&filter);

        let mut state = self.state.write().await;
        debug!(
            search = %filter.search,
            difficulty = filter.difficulty.as_str(),
            min_reward = filter.reward_range.min(),
            max_reward = filter.reward_range.max(),
            tags = ?filter.tags,
            total,
            "Filter changed"
        );
        state.filter = filter;
        state.reveal.reset(total);
        state.reveal.snapshot()
    }

    /// Edit the current filter in place, then restart pagination.
    pub async fn update_filter<F>(&self, edit: F) -> RevealSnapshot
    where
        F: FnOnce(&mut FilterState),
    {
        let mut filter = self.filter().await;
        edit(&mut filter);
        self.set_filter(filter).await
    }

    /// Reset every filter to its default.
    pub async fn clear_filters(&self) -> RevealSnapshot {
        self.set_filter(FilterState::cleared()).await
    }

    /// All matches for the current filter, in store order.
    pub async fn results(&self) -> Vec<BountyRecord> {
        let filter = self.filter().await;
        self.engine().run(&filter).iter().cloned().collect()
    }

    /// The matches currently revealed.
    pub async fn visible(&self) -> Vec<BountyRecord> {
        let (filter, count) = {
            let state = self.state.read().await;
            (state.filter.clone(), state.reveal.visible_count())
        };
        self.engine()
            .run(&filter)
            .visible(count)
            .iter()
            .map(|r| (*r).clone())
            .collect()
    }

    pub async fn snapshot(&self) -> RevealSnapshot {
        self.state.read().await.reveal.snapshot()
    }

    /// Called when the sentinel below the results comes into view.
    ///
    /// Ignored while a reveal is loading or once exhausted. Otherwise waits for
    /// the delay strategy and reveals one more step, unless the filter changed
    /// in the meantime. Dropping the future while it waits cancels the reveal.
    pub async fn on_sentinel_visible(&self) -> RevealOutcome {
        let generation = {
            let mut state = self.state.write().await;
            if state.reveal.is_exhausted() {
                return RevealOutcome::Exhausted;
            }
            if !state.reveal.begin_loading() {
                return RevealOutcome::Busy;
            }
            state.reveal.generation()
        };
        let mut guard = LoadingGuard::new(self.state.clone(), generation);

        self.delay.wait().await;

        let mut state = self.state.write().await;
        let outcome = match state.reveal.complete_loading(generation) {
            Some(visible_count) => RevealOutcome::Advanced { visible_count },
            None => RevealOutcome::Discarded,
        };
        guard.disarm();
        outcome
    }

    /// Explicit "load more": reveal one step now, without the delay.
    pub async fn load_more(&self) -> RevealOutcome {
        let mut state = self.state.write().await;
        if state.reveal.is_exhausted() {
            return RevealOutcome::Exhausted;
        }
        if state.reveal.state() == RevealState::Loading {
            return RevealOutcome::Busy;
        }
        let visible_count = state.reveal.advance_default();
        RevealOutcome::Advanced { visible_count }
    }

    /// Look up a bounty for its detail page.
    pub fn bounty(&self, id: &str) -> Result<&BountyRecord> {
        self.store
            .get(id)
            .ok_or_else(|| ExploreError::NotFound(id.to_string()))
    }

    /// Other bounties to suggest on a detail page.
    pub fn related(&self, id: &str, limit: usize) -> Result<Vec<&BountyRecord>> {
        self.bounty(id)?;
        Ok(self.store.related(id, limit))
    }

    /// Tags offered in the filter panel.
    pub fn available_tags(&self) -> Vec<&str> {
        self.store.tag_vocabulary()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::sample_store;

    use crate::delay::NoDelay;

    fn session() -> ExploreSession {
        ExploreSession::with_config(Arc::new(sample_store()), ExploreConfig::immediate()).unwrap()
    }

    #[tokio::test]
    async fn test_initial_window() {
        let session = session();
        let snapshot = session.snapshot().await;
        assert_eq!(snapshot.visible_count, 12);
        assert_eq!(snapshot.total_matched, 24);
        assert_eq!(session.visible().await.len(), 12);
    }

    #[tokio::test]
    async fn test_filter_change_resets_window() {
        let session = session();
        session.load_more().await;
        assert_eq!(session.snapshot().await.visible_count, 18);

        let snapshot = session
            .update_filter(|f| f.reward_range = catalog::RewardRange::new(0, 300))
            .await;
        assert_eq!(snapshot.visible_count, 12);
        assert_eq!(snapshot.total_matched, 12);
        assert!(snapshot.is_exhausted);
    }

    #[tokio::test]
    async fn test_sentinel_reveals_until_exhausted() {
        let session = session().with_delay(Arc::new(NoDelay));
        assert_eq!(
            session.on_sentinel_visible().await,
            RevealOutcome::Advanced { visible_count: 18 }
        );
        assert_eq!(
            session.on_sentinel_visible().await,
            RevealOutcome::Advanced { visible_count: 24 }
        );
        assert_eq!(session.on_sentinel_visible().await, RevealOutcome::Exhausted);
        assert_eq!(session.load_more().await, RevealOutcome::Exhausted);
    }

    #[tokio::test]
    async fn test_empty_results() {
        let session = session();
        let snapshot = session
            .set_filter(FilterState::new().with_search("no such bounty"))
            .await;
        assert!(snapshot.is_empty);
        assert!(session.visible().await.is_empty());
        assert_eq!(session.on_sentinel_visible().await, RevealOutcome::Exhausted);
    }

    #[tokio::test]
    async fn test_bounty_lookup() {
        let session = session();
        assert_eq!(session.bounty("5").unwrap().reward, 500);
        assert!(matches!(session.bounty("99"), Err(ExploreError::NotFound(_))));
        assert_eq!(session.related("1", 4).unwrap().len(), 4);
        assert_eq!(session.available_tags().len(), 18);
    }
}
