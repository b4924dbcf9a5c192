use std::time::Duration;

use reqwest::blocking::Client;
use serde::Serialize;
use serde_json::{json, Value};

use crate::enrichment::EnrichmentError;

const GRAPHQL_URL: &str = "https://apis.justwatch.com/graphql";
const IMAGE_BASE_URL: &str = "https://images.justwatch.com";

const COUNTRY: &str = "AU";
const LANGUAGE: &str = "en";
const MAX_SEARCH_RESULTS: usize = 5;

const SEARCH_QUERY: &str = r#"
query GetSearchTitles($country: Country!, $language: Language!, $first: Int!, $filter: TitleFilter) {
  popularTitles(country: $country, first: $first, filter: $filter) {
    edges {
      node {
        content(country: $country, language: $language) {
          title
        }
        offers(country: $country, platform: WEB) {
          monetizationType
          standardWebURL
          package {
            clearName
            icon
          }
        }
      }
    }
  }
}
"#;

/// One place a film can be streamed, as shown on the card badges and in
/// the JSON API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StreamingOffer {
    pub service_name: String,
    pub icon_url: String,
    pub offer_url: String,
}

pub struct JustWatchClient {
    client: Client,
}

impl JustWatchClient {
    pub fn new() -> Result<Self, EnrichmentError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(|e| EnrichmentError::Network(e.to_string()))?;

        Ok(Self { client })
    }

    /// Searches JustWatch (Australia) for the film and returns the
    /// deduplicated subscription/ad-supported streaming offers of the best
    /// match. An empty list means "nothing found", not a failure.
    pub fn offers_for_film(&self, title: &str) -> Result<Vec<StreamingOffer>, EnrichmentError> {
        let body = json!({
            "query": SEARCH_QUERY,
            "variables": {
                "country": COUNTRY,
                "language": LANGUAGE,
                "first": MAX_SEARCH_RESULTS,
                "filter": { "searchQuery": title },
            },
        });

        let data: Value = self
            .client
            .post(GRAPHQL_URL)
            .json(&body)
            .send()
            .map_err(|e| EnrichmentError::Network(e.to_string()))?
            .json()
            .map_err(|e| EnrichmentError::JsonParse(e.to_string()))?;

        Self::extract_offers(&data)
    }

    /// Walks the GraphQL response down to the first search hit's offers.
    fn extract_offers(data: &Value) -> Result<Vec<StreamingOffer>, EnrichmentError> {
        if let Some(errors) = data.get("errors").and_then(Value::as_array) {
            if let Some(first) = errors.first() {
                let msg = first
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown GraphQL error");
                return Err(EnrichmentError::UnexpectedShape(msg.to_string()));
            }
        }

        let edges = data
            .pointer("/data/popularTitles/edges")
            .and_then(Value::as_array)
            .ok_or_else(|| {
                EnrichmentError::UnexpectedShape("popularTitles.edges missing".into())
            })?;

        let Some(best) = edges.first() else {
            return Ok(Vec::new());
        };

        let offers = best
            .pointer("/node/offers")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        // Subscription and ad-supported offers only, one badge per service,
        // first occurrence wins.
        let mut seen = Vec::new();
        let mut result = Vec::new();
        for offer in &offers {
            let monetization = offer
                .get("monetizationType")
                .and_then(Value::as_str)
                .unwrap_or("");
            if monetization != "FLATRATE" && monetization != "ADS" {
                continue;
            }

            let Some(name) = offer
                .pointer("/package/clearName")
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|n| !n.is_empty())
            else {
                continue;
            };
            let Some(icon) = offer.pointer("/package/icon").and_then(Value::as_str) else {
                continue;
            };
            let offer_url = offer
                .get("standardWebURL")
                .and_then(Value::as_str)
                .unwrap_or("");

            if seen.iter().any(|s: &String| s.as_str() == name) {
                continue;
            }
            seen.push(name.to_string());
            result.push(StreamingOffer {
                service_name: name.to_string(),
                icon_url: icon_url(icon),
                offer_url: offer_url.to_string(),
            });
        }

        Ok(result)
    }
}

/// Expands JustWatch's icon path template into a fetchable image URL.
fn icon_url(icon_path: &str) -> String {
    let path = icon_path
        .replace("{profile}", "s100")
        .replace("{format}", "png");
    format!("{IMAGE_BASE_URL}{path}")
}
