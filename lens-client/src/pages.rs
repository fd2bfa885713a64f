//! Pagination state machine
//!
//! Tracks incremental loading of one category's rows. "Load more" appends;
//! a refresh or filter switch replaces; a failure returns to the prior
//! stable state without discarding rows already shown. Completions carry a
//! token so a superseded fetch's result is simply ignored.

use shared::PageMeta;

/// Loading state for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing fetched yet
    Idle,
    /// First page (or replacement page) in flight
    Loading,
    /// At least one page loaded, nothing in flight
    Loaded,
    /// Additional page in flight, existing rows stay visible
    LoadingMore,
}

/// Per-category pagination tracker
#[derive(Debug)]
pub struct PageTracker<T> {
    rows: Vec<T>,
    meta: Option<PageMeta>,
    state: LoadState,
    /// Stable state to return to when an in-flight load fails
    prior: LoadState,
    error: Option<String>,
    generation: u64,
}

impl<T> Default for PageTracker<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PageTracker<T> {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            meta: None,
            state: LoadState::Idle,
            prior: LoadState::Idle,
            error: None,
            generation: 0,
        }
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Last successfully fetched page (0 before the first load)
    pub fn page(&self) -> u32 {
        self.meta.map(|m| m.page).unwrap_or(0)
    }

    /// True iff fewer rows are loaded than exist server-side
    pub fn has_more(&self) -> bool {
        self.meta
            .map(|m| m.has_more(self.rows.len()))
            .unwrap_or(false)
    }

    /// Start a first load or a replacing refresh
    ///
    /// Returns the fetch token, or `None` when a load is already in
    /// flight.
    pub fn begin_load(&mut self) -> Option<u64> {
        match self.state {
            LoadState::Loading | LoadState::LoadingMore => None,
            LoadState::Idle | LoadState::Loaded => {
                self.prior = self.state;
                self.state = LoadState::Loading;
                self.error = None;
                self.generation += 1;
                Some(self.generation)
            }
        }
    }

    /// Start loading the next page
    ///
    /// A no-op returning `None` when there is nothing more to load or a
    /// load is already in flight; callers must not issue a request then.
    pub fn begin_load_more(&mut self) -> Option<u64> {
        if self.state != LoadState::Loaded || !self.has_more() {
            return None;
        }
        self.prior = LoadState::Loaded;
        self.state = LoadState::LoadingMore;
        self.error = None;
        self.generation += 1;
        Some(self.generation)
    }

    /// Record a successful fetch
    ///
    /// Replaces the row set after `begin_load`, appends after
    /// `begin_load_more`. A stale token (superseded fetch) is ignored.
    pub fn complete(&mut self, token: u64, rows: Vec<T>, meta: PageMeta) {
        if token != self.generation {
            return;
        }
        match self.state {
            LoadState::Loading => self.rows = rows,
            LoadState::LoadingMore => self.rows.extend(rows),
            LoadState::Idle | LoadState::Loaded => return,
        }
        self.meta = Some(meta);
        self.state = LoadState::Loaded;
        self.error = None;
    }

    /// Record a failed fetch: back to the prior stable state, rows kept
    pub fn fail(&mut self, token: u64, error: impl Into<String>) {
        if token != self.generation {
            return;
        }
        if matches!(self.state, LoadState::Loading | LoadState::LoadingMore) {
            self.state = self.prior;
            self.error = Some(error.into());
        }
    }

    /// Filter or category switch: back to page 1, row set replaced
    pub fn reset(&mut self) {
        self.rows.clear();
        self.meta = None;
        self.state = LoadState::Idle;
        self.prior = LoadState::Idle;
        self.error = None;
        self.generation += 1;
    }
}
