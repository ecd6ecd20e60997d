use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::{MovieDetail, MovieSummary};

/// Prompt shown before the first search and after a reset
pub const DEFAULT_PROMPT: &str = "Search for a movie title!";

/// Whether a search operation is currently in flight
///
/// Kept as an explicit two-state machine rather than a bare bool so that the
/// no-op-on-concurrent-call behavior is a named transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Searching,
}

/// Observable state published to the view layer
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    /// Accumulated search results, insertion order, deduplicated per page
    pub movies: Vec<MovieSummary>,
    /// User-visible status or error text
    pub message: String,
    pub phase: Phase,
    /// Detail record for the movie the user drilled into; `None` = empty
    pub selected: Option<MovieDetail>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            movies: Vec::new(),
            message: DEFAULT_PROMPT.to_string(),
            phase: Phase::Idle,
            selected: None,
        }
    }
}

impl SearchState {
    pub fn loading(&self) -> bool {
        self.phase == Phase::Searching
    }
}

/// Shared handle over the search state
///
/// Cloneable; all clones observe the same state. Mutation goes through the
/// aggregator's operations only, so the mutators are crate-private while
/// `snapshot` and `reset` are the public surface.
#[derive(Clone, Default)]
pub struct SearchStore {
    inner: Arc<RwLock<SearchState>>,
}

impl SearchStore {
    /// Creates a store holding the default state
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a point-in-time copy of the state
    pub async fn snapshot(&self) -> SearchState {
        self.inner.read().await.clone()
    }

    /// Restores movies, message and phase to their defaults.
    /// The selected detail is deliberately left untouched.
    pub async fn reset(&self) {
        let mut state = self.inner.write().await;
        state.movies = Vec::new();
        state.message = DEFAULT_PROMPT.to_string();
        state.phase = Phase::Idle;
    }

    /// Attempts the Idle -> Searching transition for a result search.
    ///
    /// Returns false without side effects if a search is already in flight.
    /// The check and the transition happen under one write guard, so at most
    /// one caller wins even across cloned handles.
    pub(crate) async fn begin_search(&self) -> bool {
        let mut state = self.inner.write().await;
        if state.phase == Phase::Searching {
            return false;
        }
        state.phase = Phase::Searching;
        state.message.clear();
        true
    }

    /// Attempts the Idle -> Searching transition for a detail lookup,
    /// clearing any previously selected movie.
    pub(crate) async fn begin_detail(&self) -> bool {
        let mut state = self.inner.write().await;
        if state.phase == Phase::Searching {
            return false;
        }
        state.phase = Phase::Searching;
        state.selected = None;
        true
    }

    /// Searching -> Idle; runs on every exit path of an operation.
    pub(crate) async fn finish(&self) {
        self.inner.write().await.phase = Phase::Idle;
    }

    pub(crate) async fn replace_movies(&self, movies: Vec<MovieSummary>) {
        self.inner.write().await.movies = movies;
    }

    pub(crate) async fn append_movies(&self, movies: Vec<MovieSummary>) {
        self.inner.write().await.movies.extend(movies);
    }

    /// Destructive failure policy: partial results are discarded, the error
    /// text becomes the user-visible message.
    pub(crate) async fn fail(&self, message: String) {
        let mut state = self.inner.write().await;
        state.movies = Vec::new();
        state.message = message;
    }

    pub(crate) async fn set_selected(&self, detail: MovieDetail) {
        self.inner.write().await.selected = Some(detail);
    }

    pub(crate) async fn clear_selected(&self) {
        self.inner.write().await.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: &str) -> MovieSummary {
        MovieSummary {
            imdb_id: id.to_string(),
            title: format!("Movie {}", id),
            year: "2013".to_string(),
            kind: "movie".to_string(),
            poster: String::new(),
        }
    }

    #[tokio::test]
    async fn test_default_state() {
        let store = SearchStore::new();
        let state = store.snapshot().await;

        assert!(state.movies.is_empty());
        assert_eq!(state.message, DEFAULT_PROMPT);
        assert_eq!(state.phase, Phase::Idle);
        assert!(!state.loading());
        assert!(state.selected.is_none());
    }

    #[tokio::test]
    async fn test_begin_search_wins_only_once() {
        let store = SearchStore::new();

        assert!(store.begin_search().await);
        assert!(!store.begin_search().await);
        assert!(!store.begin_detail().await);

        store.finish().await;
        assert!(store.begin_search().await);
    }

    #[tokio::test]
    async fn test_begin_search_clears_message() {
        let store = SearchStore::new();
        store.fail("boom".to_string()).await;

        assert!(store.begin_search().await);
        assert_eq!(store.snapshot().await.message, "");
    }

    #[tokio::test]
    async fn test_begin_detail_clears_selected() {
        let store = SearchStore::new();
        store.set_selected(MovieDetail::default()).await;

        assert!(store.begin_detail().await);
        assert!(store.snapshot().await.selected.is_none());
    }

    #[tokio::test]
    async fn test_fail_discards_movies() {
        let store = SearchStore::new();
        store.replace_movies(vec![summary("tt1")]).await;

        store.fail("page 2 failed".to_string()).await;
        let state = store.snapshot().await;
        assert!(state.movies.is_empty());
        assert_eq!(state.message, "page 2 failed");
    }

    #[tokio::test]
    async fn test_reset_leaves_selected_untouched() {
        let store = SearchStore::new();
        store.replace_movies(vec![summary("tt1")]).await;
        store.fail("boom".to_string()).await;
        store.set_selected(MovieDetail::default()).await;

        store.reset().await;
        let state = store.snapshot().await;
        assert!(state.movies.is_empty());
        assert_eq!(state.message, DEFAULT_PROMPT);
        assert_eq!(state.phase, Phase::Idle);
        assert!(state.selected.is_some());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = SearchStore::new();
        let other = store.clone();

        store.replace_movies(vec![summary("tt1")]).await;
        assert_eq!(other.snapshot().await.movies.len(), 1);
    }
}
