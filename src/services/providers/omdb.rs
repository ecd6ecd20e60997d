/// OMDb API provider
///
/// Talks to the OMDb REST API (https://www.omdbapi.com). OMDb reports
/// application-level failures inside a 200 response: the envelope carries
/// `"Response": "False"` plus an `"Error"` string, so both the HTTP status
/// and the envelope are checked before results are handed back.
use crate::{
    config::OmdbConfig,
    error::{SearchError, SearchResult},
    models::{deserialize_total_results, MovieDetail, MovieSummary, SearchPage, SearchQuery},
    services::providers::MovieSearchService,
};
use reqwest::Client as HttpClient;
use serde::Deserialize;

#[derive(Clone)]
pub struct OmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

/// Search response envelope; `Search`/`totalResults` are absent on failure
#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    #[serde(rename = "Search", default)]
    search: Vec<MovieSummary>,
    #[serde(
        rename = "totalResults",
        default,
        deserialize_with = "deserialize_total_results"
    )]
    total_results: u32,
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Error", default)]
    error: Option<String>,
}

impl OmdbProvider {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
        }
    }

    pub fn from_config(config: &OmdbConfig) -> Self {
        Self::new(config.omdb_api_key.clone(), config.omdb_api_url.clone())
    }

    fn parse_search_body(body: &str) -> SearchResult<SearchPage> {
        let envelope: SearchEnvelope = serde_json::from_str(body).map_err(|e| {
            tracing::error!(error = %e, response = %body, "Failed to deserialize OMDb response");
            SearchError::ExternalApi(format!("Failed to parse OMDb response: {}", e))
        })?;

        if !envelope.response.eq_ignore_ascii_case("true") {
            return Err(SearchError::ExternalApi(
                envelope
                    .error
                    .unwrap_or_else(|| "OMDb reported failure".to_string()),
            ));
        }

        Ok(SearchPage {
            results: envelope.search,
            total_results: envelope.total_results,
        })
    }

    fn parse_detail_body(body: &str) -> SearchResult<MovieDetail> {
        let mut value: serde_json::Value = serde_json::from_str(body).map_err(|e| {
            tracing::error!(error = %e, response = %body, "Failed to deserialize OMDb response");
            SearchError::ExternalApi(format!("Failed to parse OMDb response: {}", e))
        })?;

        if value["Response"] == "False" {
            return Err(SearchError::ExternalApi(
                value["Error"]
                    .as_str()
                    .unwrap_or("OMDb reported failure")
                    .to_string(),
            ));
        }

        // The envelope flag is transport plumbing, not movie data.
        if let Some(object) = value.as_object_mut() {
            object.remove("Response");
        }

        serde_json::from_value(value)
            .map_err(|e| SearchError::ExternalApi(format!("Failed to parse OMDb response: {}", e)))
    }
}

#[async_trait::async_trait]
impl MovieSearchService for OmdbProvider {
    async fn fetch_page(&self, query: &SearchQuery, page: u32) -> SearchResult<SearchPage> {
        if query.title.trim().is_empty() {
            return Err(SearchError::InvalidInput(
                "Search title cannot be empty".to_string(),
            ));
        }

        let mut params = vec![
            ("apikey", self.api_key.clone()),
            ("s", query.title.clone()),
            ("page", page.to_string()),
        ];
        if let Some(kind) = &query.kind {
            params.push(("type", kind.clone()));
        }
        if let Some(year) = &query.year {
            params.push(("y", year.clone()));
        }

        let response = self
            .http_client
            .get(&self.api_url)
            .query(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::ExternalApi(format!(
                "OMDb API returned status {}: {}",
                status, body
            )));
        }

        let body = response.text().await?;
        let page_result = Self::parse_search_body(&body)?;

        tracing::info!(
            title = %query.title,
            page = page,
            results = page_result.results.len(),
            total_results = page_result.total_results,
            provider = "omdb",
            "Search page fetched"
        );

        Ok(page_result)
    }

    async fn fetch_by_id(&self, imdb_id: &str) -> SearchResult<MovieDetail> {
        let response = self
            .http_client
            .get(&self.api_url)
            .query(&[
                ("apikey", self.api_key.as_str()),
                ("i", imdb_id),
                ("plot", "full"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::ExternalApi(format!(
                "OMDb API returned status {}: {}",
                status, body
            )));
        }

        let body = response.text().await?;
        tracing::debug!(response = %body, "Raw OMDb detail response");

        let detail = Self::parse_detail_body(&body)?;

        tracing::info!(
            imdb_id = %imdb_id,
            title = %detail.title,
            provider = "omdb",
            "Movie detail fetched"
        );

        Ok(detail)
    }

    fn name(&self) -> &'static str {
        "omdb"
    }
}
