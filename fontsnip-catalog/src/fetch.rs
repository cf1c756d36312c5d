//! One-shot catalog fetch from the webfonts API.
//!
//! Issues a single HTTPS GET with a fixed trending sort order and the
//! caller's API key, and returns the `items` array as `FontFamily`
//! records. Failures are surfaced uninterpreted; nothing is retried.

use crate::family::FontFamily;
use crate::http;
use thiserror::Error;

/// Fixed catalog endpoint (query parameters are appended at call time).
const CATALOG_API_URL: &str = "https://www.googleapis.com/webfonts/v1/webfonts";

/// Fixed sort order for the catalog listing.
const SORT_ORDER: &str = "trending";

/// Errors produced by a catalog fetch.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request could not complete (DNS, connection, TLS, non-2xx,
    /// or a truncated body).
    #[error("catalog request failed: {0}")]
    Network(String),

    /// The response body was not the expected JSON shape.
    #[error("catalog response could not be parsed: {0}")]
    Parse(String),

    /// No usable API key or an invalid endpoint override.
    #[error("{0}")]
    Config(String),
}

/// Fetch the font catalog.
///
/// `endpoint` overrides the fixed catalog URL (it must be HTTPS); the
/// default endpoint is additionally checked against the Google host
/// allowlist. The API key is sent as the `key` query parameter and is
/// never logged.
///
/// # Errors
///
/// Returns [`CatalogError::Config`] for a rejected endpoint,
/// [`CatalogError::Network`] when the request cannot complete, and
/// [`CatalogError::Parse`] when the body is not a JSON object with an
/// `items` array of family records.
pub fn fetch_catalog(api_key: &str, endpoint: Option<&str>) -> Result<Vec<FontFamily>, CatalogError> {
    let base = match endpoint {
        Some(custom) => {
            http::validate_custom_endpoint(custom).map_err(CatalogError::Config)?;
            custom
        }
        None => {
            // Validate at call time so any future change to CATALOG_API_URL is caught.
            http::validate_catalog_url(CATALOG_API_URL).map_err(CatalogError::Config)?;
            CATALOG_API_URL
        }
    };

    let url = format!("{}?sort={}&key={}", base, SORT_ORDER, api_key);
    log::debug!("Fetching font catalog from {} (sort={})", base, SORT_ORDER);

    let mut body = http::agent()
        .get(&url)
        .header("User-Agent", "fontsnip")
        .header("Accept", "application/json")
        .call()
        .map_err(|e| {
            CatalogError::Network(format!(
                "Failed to fetch the font catalog from {}: {}. Check your internet connection.",
                base, e
            ))
        })?
        .into_body();

    let body_str = body
        .with_config()
        .limit(http::MAX_CATALOG_RESPONSE_SIZE)
        .read_to_string()
        .map_err(|e| CatalogError::Network(format!("Failed to read catalog response body: {}", e)))?;

    let families = parse_catalog(&body_str)?;
    log::info!("Fetched {} font families", families.len());
    Ok(families)
}

/// Parse a catalog response body into family records.
///
/// The body must be a JSON object with an `items` array.
pub fn parse_catalog(body: &str) -> Result<Vec<FontFamily>, CatalogError> {
    let json: serde_json::Value =
        serde_json::from_str(body).map_err(|e| CatalogError::Parse(e.to_string()))?;

    let items = json
        .get("items")
        .cloned()
        .ok_or_else(|| CatalogError::Parse("no 'items' array in catalog response".to_string()))?;

    serde_json::from_value(items).map_err(|e| CatalogError::Parse(e.to_string()))
}
