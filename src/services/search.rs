use std::collections::HashSet;
use std::sync::Arc;

use crate::{
    error::SearchResult,
    models::{MovieSummary, SearchQuery},
    services::providers::MovieSearchService,
    state::SearchStore,
};

/// Fixed page size of the external service contract. The pagination math
/// below assumes it; if the service ever changes its page size this constant
/// must change in lockstep.
pub const PAGE_SIZE: u32 = 10;

/// Paginated search aggregator
///
/// Drives one search at a time against an injected [`MovieSearchService`],
/// accumulates deduplicated results and publishes them through an injected
/// [`SearchStore`]. Cloneable; clones share the service and the store.
#[derive(Clone)]
pub struct SearchAggregator {
    service: Arc<dyn MovieSearchService>,
    store: SearchStore,
}

impl SearchAggregator {
    pub fn new(service: Arc<dyn MovieSearchService>, store: SearchStore) -> Self {
        Self { service, store }
    }

    /// The store this aggregator publishes to
    pub fn store(&self) -> &SearchStore {
        &self.store
    }

    /// Runs a paginated search and publishes the outcome to the store.
    ///
    /// No-op if a search is already in flight. On any fetch error the
    /// accumulated results are discarded, the error text becomes the
    /// user-visible message and remaining pages are not fetched. The
    /// Searching phase is released on every exit path.
    pub async fn search(&self, query: &SearchQuery) {
        if !self.store.begin_search().await {
            return;
        }

        if let Err(err) = self.run_search(query).await {
            tracing::warn!(error = %err, title = %query.title, "Movie search failed");
            self.store.fail(err.to_string()).await;
        }

        self.store.finish().await;
    }

    async fn run_search(&self, query: &SearchQuery) -> SearchResult<()> {
        let first = self.service.fetch_page(query, 1).await?;
        let total_results = first.total_results;
        self.store.replace_movies(dedup_page(first.results)).await;

        let total_pages = total_results.div_ceil(PAGE_SIZE);
        if total_pages > 1 {
            for page in 2..=total_pages {
                // Page budget rule: a page is skipped once its number exceeds
                // desired_count / 10 under real (not integer) division, so a
                // desired_count of 35 still admits page 3 but not page 4.
                if f64::from(page) > f64::from(query.desired_count) / f64::from(PAGE_SIZE) {
                    break;
                }

                let next = self.service.fetch_page(query, page).await?;
                self.store.append_movies(dedup_page(next.results)).await;
            }
        }

        Ok(())
    }

    /// Fetches the detail record for one movie and publishes it as the
    /// selected movie.
    ///
    /// No-op if a search is already in flight. On error the selection is
    /// cleared and the error is not surfaced as a message.
    pub async fn search_by_id(&self, imdb_id: &str) {
        if !self.store.begin_detail().await {
            return;
        }

        match self.service.fetch_by_id(imdb_id).await {
            Ok(detail) => self.store.set_selected(detail).await,
            Err(err) => {
                tracing::debug!(error = %err, imdb_id = %imdb_id, "Movie detail fetch failed");
                self.store.clear_selected().await;
            }
        }

        self.store.finish().await;
    }

    /// Restores movies, message and phase to their defaults; the selected
    /// movie is left untouched.
    pub async fn reset(&self) {
        self.store.reset().await;
    }
}

/// Removes duplicate IMDB IDs within one page, keeping first occurrence
/// order. Dedup is intentionally per page: entries repeated across different
/// pages all survive in the accumulated sequence.
fn dedup_page(results: Vec<MovieSummary>) -> Vec<MovieSummary> {
    let mut seen = HashSet::new();
    results
        .into_iter()
        .filter(|movie| seen.insert(movie.imdb_id.clone()))
        .collect()
}
