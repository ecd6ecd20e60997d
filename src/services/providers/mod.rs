/// Movie search service abstraction
///
/// Pluggable data sources for the aggregator. A provider answers paged title
/// searches and single-movie detail lookups; the aggregator never sees HTTP.
use crate::{
    error::SearchResult,
    models::{MovieDetail, SearchPage, SearchQuery},
};

pub mod omdb;

/// Trait for movie search providers
///
/// Both operations reject with a `SearchError` whose Display text is suitable
/// for showing to the user; the aggregator surfaces it verbatim.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieSearchService: Send + Sync {
    /// Fetch one page of search results
    ///
    /// Pages are 1-based and hold at most `PAGE_SIZE` entries. The returned
    /// `total_results` is the service's count across all pages.
    async fn fetch_page(&self, query: &SearchQuery, page: u32) -> SearchResult<SearchPage>;

    /// Fetch the full detail record for one movie by IMDB ID
    async fn fetch_by_id(&self, imdb_id: &str) -> SearchResult<MovieDetail>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
