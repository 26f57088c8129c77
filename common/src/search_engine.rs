//! Debounced search-as-you-type controller.
//!
//! The controller owns no timers and performs no I/O. The view feeds it
//! keystrokes, timer expiries and lookup responses; it answers with what to
//! do next. Every term change bumps a generation counter, and both timers and
//! lookups carry the generation they were created for. Anything that comes
//! back tagged with an older generation is ignored, which makes cancelling
//! a timer or an in-flight request optional for the caller.

use std::time::Duration;

use thiserror::Error;

use crate::search_const::{SEARCH_CATEGORY_LIMIT, SEARCH_DEBOUNCE_WINDOW_MS, SEARCH_MIN_TERM_LENGTH, SEARCH_PRODUCT_LIMIT};
use crate::search_result::{SearchResultSet, SearchSelection};


#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub debounce_window: Duration,
    pub min_term_length: usize,
    pub product_limit: usize,
    pub category_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_window: Duration::from_millis(SEARCH_DEBOUNCE_WINDOW_MS),
            min_term_length: SEARCH_MIN_TERM_LENGTH,
            product_limit: SEARCH_PRODUCT_LIMIT,
            category_limit: SEARCH_CATEGORY_LIMIT,
        }
    }
}

/// Identifies one armed debounce timer and the lookup it may turn into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchSeq(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermChange {
    /// Term too short; results were cleared and nothing is pending.
    Suppressed,
    /// A timer must be started; when it fires, report `seq` back.
    Armed { seq: SearchSeq, delay: Duration },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub seq: SearchSeq,
    pub term: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome {
    Rendered,
    Discarded,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("search request failed: {0}")]
    Transport(String),
    #[error("unexpected search response: {0}")]
    MalformedResponse(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchController {
    config: SearchConfig,
    term: String,
    generation: u64,
    timer_armed: bool,
    in_flight: bool,
    results: SearchResultSet,
    panel_open: bool,
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl SearchController {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            term: String::new(),
            generation: 0,
            timer_armed: false,
            in_flight: false,
            results: SearchResultSet::default(),
            panel_open: false,
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn results(&self) -> &SearchResultSet {
        &self.results
    }

    /// True from the moment a timer is armed until the matching lookup settles.
    pub fn is_loading(&self) -> bool {
        self.timer_armed || self.in_flight
    }

    pub fn is_panel_open(&self) -> bool {
        self.panel_open
    }

    fn term_is_searchable(&self, term: &str) -> bool {
        term.trim().chars().count() >= self.config.min_term_length
    }

    /// Called on every keystroke. Supersedes any pending timer or lookup.
    pub fn on_term_change(&mut self, term: impl Into<String>) -> TermChange {
        self.term = term.into();
        self.generation += 1;
        self.in_flight = false;

        if !self.term_is_searchable(&self.term) {
            self.timer_armed = false;
            self.results = SearchResultSet::default();
            self.panel_open = false;
            return TermChange::Suppressed;
        }

        self.timer_armed = true;
        self.panel_open = true;
        TermChange::Armed { seq: SearchSeq(self.generation), delay: self.config.debounce_window }
    }

    /// Called when the debounce timer for `seq` fires. Returns the lookup to
    /// issue, or `None` when a later keystroke already superseded the timer.
    pub fn on_timer_elapsed(&mut self, seq: SearchSeq) -> Option<LookupRequest> {
        if !self.timer_armed || seq.0 != self.generation {
            return None;
        }
        self.timer_armed = false;
        self.in_flight = true;
        Some(LookupRequest { seq, term: self.term.trim().to_string() })
    }

    /// Called when the lookup for `seq` resolves or fails.
    pub fn on_lookup_settled(&mut self, seq: SearchSeq, response: Result<SearchResultSet, LookupError>) -> LookupOutcome {
        if !self.in_flight || seq.0 != self.generation {
            return LookupOutcome::Discarded;
        }
        self.in_flight = false;
        self.results = match response {
            Ok(results) => results.truncated(self.config.product_limit, self.config.category_limit),
            Err(_) => SearchResultSet::default(),
        };
        LookupOutcome::Rendered
    }

    /// A result was clicked: the view navigates, the query is reset.
    pub fn on_result_selected(&mut self, selection: SearchSelection) -> SearchSelection {
        self.reset();
        selection
    }

    pub fn close_panel(&mut self) {
        self.panel_open = false;
    }

    /// Reopens the panel on focus when there is something worth showing.
    pub fn reopen_panel(&mut self) {
        if self.term_is_searchable(&self.term) && (self.is_loading() || !self.results.is_empty()) {
            self.panel_open = true;
        }
    }

    pub fn reset(&mut self) {
        self.term.clear();
        self.generation += 1;
        self.timer_armed = false;
        self.in_flight = false;
        self.results = SearchResultSet::default();
        self.panel_open = false;
    }
}
