//! Client-side state container for a movie-search UI.
//!
//! [`SearchAggregator`] paginates results from a [`MovieSearchService`]
//! provider (OMDb out of the box), deduplicates them per page and publishes
//! observable state through a shared [`SearchStore`] that a view layer can
//! snapshot.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;

pub use config::OmdbConfig;
pub use error::{SearchError, SearchResult};
pub use models::{MovieDetail, MovieSummary, SearchPage, SearchQuery};
pub use services::providers::omdb::OmdbProvider;
pub use services::{MovieSearchService, SearchAggregator, PAGE_SIZE};
pub use state::{Phase, SearchState, SearchStore, DEFAULT_PROMPT};
