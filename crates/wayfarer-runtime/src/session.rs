//! Search session - drives one display surface
//!
//! The session owns the clock refresher and its current [`RefreshHandle`].
//! Every display of new results first stops the running cycle and drops
//! the old subscriptions, so clocks of removed cards are never updated.

use std::sync::Arc;

use wayfarer_core::{Record, WayfarerResult};
use wayfarer_search::{KeywordMatcher, SearchQuery};
use wayfarer_time::{ClockRefresher, RefreshHandle, WorldClock};

use crate::{
    Card, CatalogSource, Notifier, ResultRenderer, RuntimeConfig, CLEARED_STATUS,
    EMPTY_QUERY_ALERT, LOAD_ERROR_ALERT, LOAD_ERROR_STATUS, SEARCHING_STATUS,
};

/// Result of a search request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Blank input; nothing was loaded or filtered
    Rejected,
    /// Results were rendered; carries the number of cards (may be zero)
    Displayed(usize),
}

#[derive(Clone, Debug, Default)]
pub struct SessionStats {
    pub searches: u64,
    pub rejected: u64,
    pub load_failures: u64,
    pub cards_rendered: u64,
}

/// One search surface: source, matcher, renderer, and live clocks
pub struct SearchSession {
    source: CatalogSource,
    matcher: KeywordMatcher,
    refresher: ClockRefresher,
    renderer: Arc<dyn ResultRenderer>,
    notifier: Arc<dyn Notifier>,
    refresh: Option<RefreshHandle>,
    stats: SessionStats,
}

impl SearchSession {
    /// Session with the built-in vocabulary and zone table
    pub fn new(
        config: &RuntimeConfig,
        renderer: Arc<dyn ResultRenderer>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self::with_parts(
            config,
            KeywordMatcher::default(),
            WorldClock::default(),
            renderer,
            notifier,
        )
    }

    pub fn with_parts(
        config: &RuntimeConfig,
        matcher: KeywordMatcher,
        clock: WorldClock,
        renderer: Arc<dyn ResultRenderer>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        SearchSession {
            source: config.source.clone(),
            matcher,
            refresher: ClockRefresher::with_config(clock, config.refresher_config()),
            renderer,
            notifier,
            refresh: None,
            stats: SessionStats::default(),
        }
    }

    /// Search the catalogue for `raw` and display the matches.
    ///
    /// Blank input is rejected with an alert. A load failure is alerted
    /// once and returned; the results already on screen stay as they are.
    pub async fn search(&mut self, raw: &str) -> WayfarerResult<SearchOutcome> {
        let Some(query) = SearchQuery::parse(raw) else {
            self.stats.rejected += 1;
            self.notifier.alert(EMPTY_QUERY_ALERT);
            return Ok(SearchOutcome::Rejected);
        };

        self.stats.searches += 1;
        tracing::debug!(query = %query, "searching");
        self.notifier.status(SEARCHING_STATUS);

        let catalog = match self.source.load().await {
            Ok(catalog) => catalog,
            Err(err) => {
                self.stats.load_failures += 1;
                tracing::error!(source = %self.source, error = %err, "error fetching data");
                self.notifier.status(LOAD_ERROR_STATUS);
                self.notifier.alert(LOAD_ERROR_ALERT);
                return Err(err);
            }
        };

        let matched: Vec<Record> = self
            .matcher
            .filter_all(catalog.records(), query.as_str())
            .into_iter()
            .cloned()
            .collect();

        Ok(SearchOutcome::Displayed(self.display(matched)))
    }

    /// Load and display every recommendation. Failures are logged only.
    pub async fn show_all(&mut self) -> WayfarerResult<usize> {
        match self.source.load().await {
            Ok(catalog) => Ok(self.display(catalog.recommendations)),
            Err(err) => {
                self.stats.load_failures += 1;
                tracing::error!(source = %self.source, error = %err, "error loading recommendations");
                Err(err)
            }
        }
    }

    /// Replace the current results with `records` and restart the clocks.
    /// Returns the number of cards rendered.
    pub fn display(&mut self, records: Vec<Record>) -> usize {
        self.stop_clocks();
        self.renderer.clear();

        let clock = self.refresher.clock();
        let cards: Vec<Card> = records
            .into_iter()
            .map(|record| {
                let snapshot = clock.current_time(&record.country);
                Card { record, snapshot }
            })
            .collect();

        let displays = self.renderer.render(&cards);
        for display in displays {
            self.refresher.subscribe(display);
        }

        if self.refresher.subscription_count() > 0 {
            self.refresh = Some(self.refresher.start());
        }

        self.stats.cards_rendered += cards.len() as u64;
        cards.len()
    }

    /// Stop the clocks and remove all results
    pub fn reset(&mut self) {
        self.stop_clocks();
        self.renderer.clear();
        self.notifier.status(CLEARED_STATUS);
        tracing::info!("search reset - all results cleared");
    }

    fn stop_clocks(&mut self) {
        if let Some(handle) = self.refresh.take() {
            self.refresher.stop(handle);
        }
        self.refresher.clear_subscriptions();
    }

    pub fn refresher(&self) -> &ClockRefresher {
        &self.refresher
    }

    pub fn refresh_handle(&self) -> Option<RefreshHandle> {
        self.refresh
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }
}
