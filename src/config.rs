use serde::Deserialize;

/// OMDb client configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct OmdbConfig {
    /// OMDb API key
    pub omdb_api_key: String,

    /// OMDb API base URL
    #[serde(default = "default_omdb_api_url")]
    pub omdb_api_url: String,
}

fn default_omdb_api_url() -> String {
    "https://www.omdbapi.com".to_string()
}

impl OmdbConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<OmdbConfig>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
