use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;

use crate::enrichment::EnrichmentError;

const OMDB_BASE_URL: &str = "http://www.omdbapi.com/";

/// Injected credentials for the OMDb poster lookup. The key always arrives
/// through configuration, never as a compiled-in constant.
#[derive(Debug, Clone)]
pub struct OmdbConfig {
    pub api_key: String,
}

pub struct OmdbClient {
    client: Client,
    config: OmdbConfig,
}

#[derive(Debug, Deserialize)]
struct OmdbResponse {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Poster")]
    poster: Option<String>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

impl OmdbClient {
    pub fn new(config: OmdbConfig) -> Result<Self, EnrichmentError> {
        if config.api_key.is_empty() {
            return Err(EnrichmentError::Config("empty OMDb API key".into()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| EnrichmentError::Network(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Looks up the poster URL for one IMDb title id.
    ///
    /// `Ok(None)` covers every "no poster" answer: unknown id, a record
    /// without a poster, or OMDb's literal `"N/A"` placeholder.
    pub fn fetch_poster(&self, imdb_id: &str) -> Result<Option<String>, EnrichmentError> {
        let resp: OmdbResponse = self
            .client
            .get(OMDB_BASE_URL)
            .query(&[("i", imdb_id), ("apikey", self.config.api_key.as_str())])
            .send()
            .map_err(|e| EnrichmentError::Network(e.to_string()))?
            .json()
            .map_err(|e| EnrichmentError::JsonParse(e.to_string()))?;

        if resp.response != "True" {
            log::debug!(
                "OMDb miss for {imdb_id}: {}",
                resp.error.as_deref().unwrap_or("no reason given")
            );
            return Ok(None);
        }

        Ok(resp.poster.filter(|p| !p.is_empty() && p != "N/A"))
    }
}
