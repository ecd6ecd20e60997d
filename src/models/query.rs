use serde::{Deserialize, Serialize};

/// Parameters for one movie search
///
/// `desired_count` is an upper bound on how many results the caller wants in
/// total; it only bounds how many pages the aggregator fetches. `kind` and
/// `year` are optional filters passed through to the service untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchQuery {
    pub title: String,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    pub desired_count: u32,
}

impl SearchQuery {
    pub fn new(title: impl Into<String>, desired_count: u32) -> Self {
        Self {
            title: title.into(),
            kind: None,
            year: None,
            desired_count,
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }
}
