/// Library-level errors
///
/// Every failure from the search service collaborator folds into one of these
/// variants; only the Display text ever reaches the view layer.
#[derive(thiserror::Error, Debug)]
pub enum SearchError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("External API error: {0}")]
    ExternalApi(String),
}

pub type SearchResult<T> = Result<T, SearchError>;
