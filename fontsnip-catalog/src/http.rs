//! HTTP client helper with native-tls support.

use std::time::Duration;
use ureq::Agent;
use ureq::tls::{RootCerts, TlsConfig, TlsProvider};

/// Global timeout for all HTTP operations (30 seconds).
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum response body size for the catalog response (10 MB).
pub const MAX_CATALOG_RESPONSE_SIZE: u64 = 10 * 1024 * 1024;

/// Allowlisted hostnames for catalog requests.
///
/// Only Google's fonts API hosts are permitted. Any other host is
/// rejected regardless of the URL path.
const ALLOWED_HOSTS: &[&str] = &["www.googleapis.com", "fonts.googleapis.com"];

/// Validate that a URL is safe to use for catalog operations.
///
/// Enforces:
/// - HTTPS scheme only (no HTTP, ftp, file://, etc.)
/// - Host must be in the Google fonts allowlist
///
/// Returns `Ok(())` if the URL is acceptable, or an error string
/// describing why it was rejected.
pub fn validate_catalog_url(url: &str) -> Result<(), String> {
    let parsed = url::Url::parse(url).map_err(|e| format!("Invalid URL '{}': {}", url, e))?;

    match parsed.scheme() {
        "https" => {}
        scheme => {
            return Err(format!(
                "Insecure URL scheme '{}' rejected; only HTTPS is allowed. URL: {}",
                scheme, url
            ));
        }
    }

    let host = parsed.host_str().unwrap_or("");
    if !ALLOWED_HOSTS.contains(&host) {
        return Err(format!(
            "URL host '{}' is not in the allowed list for catalog requests. \
             Allowed hosts: {}. URL: {}",
            host,
            ALLOWED_HOSTS.join(", "),
            url
        ));
    }

    Ok(())
}

/// Validate a user-supplied catalog endpoint override.
///
/// Overrides skip the host allowlist (the user asked for that host
/// explicitly) but must still be HTTPS.
pub fn validate_custom_endpoint(url: &str) -> Result<(), String> {
    let parsed = url::Url::parse(url).map_err(|e| format!("Invalid URL '{}': {}", url, e))?;
    if parsed.scheme() != "https" {
        return Err(format!(
            "Insecure URL scheme '{}' rejected for catalog endpoint; only HTTPS is allowed. URL: {}",
            parsed.scheme(),
            url
        ));
    }
    Ok(())
}

/// Create a new HTTP agent configured with native-tls and a global timeout.
pub fn agent() -> Agent {
    let tls_config = TlsConfig::builder()
        .provider(TlsProvider::NativeTls)
        .root_certs(RootCerts::PlatformVerifier)
        .build();

    Agent::config_builder()
        .tls_config(tls_config)
        .timeout_global(Some(HTTP_TIMEOUT))
        .build()
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_googleapis_host() {
        assert!(
            validate_catalog_url("https://www.googleapis.com/webfonts/v1/webfonts?sort=trending")
                .is_ok()
        );
    }

    #[test]
    fn test_valid_fonts_googleapis_host() {
        assert!(validate_catalog_url("https://fonts.googleapis.com/css?family=Roboto").is_ok());
    }

    #[test]
    fn test_rejected_http_scheme() {
        let result = validate_catalog_url("http://www.googleapis.com/webfonts/v1/webfonts");
        assert!(result.is_err());
        let msg = result.unwrap_err();
        assert!(
            msg.contains("HTTPS"),
            "Error should mention HTTPS requirement: {msg}"
        );
    }

    #[test]
    fn test_rejected_file_scheme() {
        assert!(validate_catalog_url("file:///etc/passwd").is_err());
    }

    #[test]
    fn test_rejected_unknown_host() {
        let result = validate_catalog_url("https://evil.example.com/webfonts");
        assert!(result.is_err());
        let msg = result.unwrap_err();
        assert!(
            msg.contains("evil.example.com"),
            "Error should name the rejected host: {msg}"
        );
        assert!(
            msg.contains("allowed list"),
            "Error should mention the allowlist: {msg}"
        );
    }

    #[test]
    fn test_rejected_lookalike_host() {
        // Subdomain-of-allowed is NOT the same as the allowed host itself.
        assert!(validate_catalog_url("https://fake.www.googleapis.com/webfonts").is_err());
    }

    #[test]
    fn test_rejected_invalid_url() {
        let result = validate_catalog_url("not a url at all");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid URL"));
    }

    #[test]
    fn test_custom_endpoint_any_https_host() {
        assert!(validate_custom_endpoint("https://mirror.example.com/webfonts").is_ok());
    }

    #[test]
    fn test_custom_endpoint_rejects_http() {
        assert!(validate_custom_endpoint("http://mirror.example.com/webfonts").is_err());
    }
}
