//! Club page retrieval.
//!
//! Pages are fetched with a single GET and no retries. A saved page can be read
//! from disk instead, which is also how pages rendered by a real browser are
//! fed in.

use crate::config::Config;
use crate::error::AppError;
use reqwest::{Client, StatusCode, header};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// Creates an HTTP client with the configured timeout and user agent.
pub fn create_http_client(config: &Config) -> Result<Client, AppError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(config.http_timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}

/// Checks that `url` is an absolute http(s) URL.
pub fn validate_club_url(url: &str) -> Result<(), AppError> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .ok_or_else(|| AppError::invalid_url(url))?;

    let host = rest.split(['/', '?', '#']).next().unwrap_or("");
    if host.is_empty() {
        return Err(AppError::invalid_url(url));
    }
    Ok(())
}

/// Maps a non-success status code to an error.
pub fn status_error(status: StatusCode, url: &str) -> AppError {
    let reason = status.canonical_reason().unwrap_or("Unknown error");
    match status.as_u16() {
        404 => AppError::page_not_found(url),
        429 => AppError::rate_limited(url),
        code => AppError::http_status(code, reason, url),
    }
}

/// Fetches the club page at `url` and returns its HTML.
///
/// # Errors
/// * `AppError::InvalidUrl` - `url` is not an http(s) URL
/// * `AppError::NetworkTimeout` / `AppError::NetworkConnection` - transport failures
/// * `AppError::PageNotFound`, `AppError::RateLimited`, `AppError::HttpStatus` - non-2xx status
/// * `AppError::EmptyPage` - the body is blank
#[instrument(skip(client))]
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, AppError> {
    validate_club_url(url)?;
    info!("Fetching club page: {url}");

    let response = client
        .get(url)
        .header(header::ACCEPT, "text/html,application/xhtml+xml")
        .send()
        .await
        .map_err(|e| {
            error!("Request failed for URL {}: {}", url, e);
            if e.is_timeout() {
                AppError::network_timeout(url)
            } else if e.is_connect() {
                AppError::network_connection(url, e.to_string())
            } else {
                AppError::PageFetch(e)
            }
        })?;

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        error!("HTTP {} (URL: {})", status.as_u16(), url);
        return Err(status_error(status, url));
    }

    let body = response.text().await?;
    debug!("Response length: {} bytes", body.len());

    if body.trim().is_empty() {
        return Err(AppError::empty_page(url));
    }
    Ok(body)
}

/// Reads a saved club page from disk.
pub async fn read_page_file(path: &Path) -> Result<String, AppError> {
    info!("Reading club page from {}", path.display());
    let body = tokio::fs::read_to_string(path).await?;
    if body.trim().is_empty() {
        return Err(AppError::empty_page(path.display().to_string()));
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{header as header_matcher, method, path},
    };

    const CLUB_PATH: &str = "/team/10/manchester-city/";

    async fn mount_club_page(response: ResponseTemplate) -> MockServer {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(CLUB_PATH))
            .respond_with(response)
            .mount(&mock_server)
            .await;
        mock_server
    }

    fn club_url(mock_server: &MockServer) -> String {
        format!("{}{}", mock_server.uri(), CLUB_PATH)
    }

    async fn fetch_from(response: ResponseTemplate) -> Result<String, AppError> {
        let mock_server = mount_club_page(response).await;
        let client = create_http_client(&Config::default()).unwrap();
        fetch_page(&client, &club_url(&mock_server)).await
    }

    #[test]
    fn test_validate_club_url() {
        assert!(validate_club_url("https://sofifa.com/team/10/manchester-city/").is_ok());
        assert!(validate_club_url("http://localhost:8080/team").is_ok());
        assert!(matches!(
            validate_club_url("sofifa.com/team/10"),
            Err(AppError::InvalidUrl(_))
        ));
        assert!(validate_club_url("https://").is_err());
        assert!(validate_club_url("ftp://sofifa.com").is_err());
    }

    #[test]
    fn test_status_error_mapping() {
        let url = "https://sofifa.com/team/1";
        assert!(matches!(
            status_error(StatusCode::NOT_FOUND, url),
            AppError::PageNotFound { .. }
        ));
        assert!(matches!(
            status_error(StatusCode::TOO_MANY_REQUESTS, url),
            AppError::RateLimited { .. }
        ));
        match status_error(StatusCode::FORBIDDEN, url) {
            AppError::HttpStatus {
                status, message, ..
            } => {
                assert_eq!(status, 403);
                assert_eq!(message, "Forbidden");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(matches!(
            status_error(StatusCode::BAD_GATEWAY, url),
            AppError::HttpStatus { status: 502, .. }
        ));
    }

    #[test]
    fn test_create_http_client() {
        assert!(create_http_client(&Config::default()).is_ok());
    }

    #[tokio::test]
    async fn test_fetch_rejects_invalid_url_before_requesting() {
        let client = create_http_client(&Config::default()).unwrap();
        let result = fetch_page(&client, "not a url").await;
        assert!(matches!(result, Err(AppError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_read_page_file() {
        let temp_dir = tempdir().unwrap();
        let page = temp_dir.path().join("club.html");
        tokio::fs::write(&page, "<table></table>").await.unwrap();
        assert_eq!(read_page_file(&page).await.unwrap(), "<table></table>");
    }

    #[tokio::test]
    async fn test_read_blank_page_file_is_an_error() {
        let temp_dir = tempdir().unwrap();
        let page = temp_dir.path().join("blank.html");
        tokio::fs::write(&page, "  \n").await.unwrap();
        assert!(matches!(
            read_page_file(&page).await,
            Err(AppError::EmptyPage { .. })
        ));
    }

    #[tokio::test]
    async fn test_read_missing_page_file_is_io_error() {
        let temp_dir = tempdir().unwrap();
        let result = read_page_file(&temp_dir.path().join("missing.html")).await;
        assert!(matches!(result, Err(AppError::Io(_))));
    }

    #[tokio::test]
    async fn test_fetch_page_success() {
        let result = fetch_from(
            ResponseTemplate::new(200).set_body_string("<table><tr><td>row</td></tr></table>"),
        )
        .await;
        assert_eq!(result.unwrap(), "<table><tr><td>row</td></tr></table>");
    }

    #[tokio::test]
    async fn test_fetch_page_sends_configured_user_agent() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(CLUB_PATH))
            .and(header_matcher("user-agent", "lineup-tests/1.0"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<table></table>"))
            .mount(&mock_server)
            .await;

        let config = Config {
            user_agent: "lineup-tests/1.0".to_string(),
            ..Config::default()
        };
        let client = create_http_client(&config).unwrap();
        let result = fetch_page(&client, &club_url(&mock_server)).await;
        assert_eq!(result.unwrap(), "<table></table>");
    }

    #[tokio::test]
    async fn test_fetch_page_not_found() {
        let result = fetch_from(ResponseTemplate::new(404)).await;
        match result {
            Err(AppError::PageNotFound { url }) => assert!(url.ends_with(CLUB_PATH)),
            other => panic!("expected PageNotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_page_rate_limited() {
        let result = fetch_from(ResponseTemplate::new(429)).await;
        assert!(matches!(result, Err(AppError::RateLimited { .. })));
    }

    #[tokio::test]
    async fn test_fetch_page_server_error() {
        let result = fetch_from(ResponseTemplate::new(503).set_body_string("down")).await;
        match result {
            Err(AppError::HttpStatus {
                status, message, ..
            }) => {
                assert_eq!(status, 503);
                assert_eq!(message, "Service Unavailable");
            }
            other => panic!("expected HttpStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_page_blank_body_is_empty_page() {
        let result = fetch_from(ResponseTemplate::new(200).set_body_string("  \n ")).await;
        assert!(matches!(result, Err(AppError::EmptyPage { .. })));
    }

    #[tokio::test]
    async fn test_fetch_page_timeout() {
        let mock_server = mount_club_page(
            ResponseTemplate::new(200)
                .set_body_string("<table></table>")
                .set_delay(Duration::from_secs(3)),
        )
        .await;

        let config = Config {
            http_timeout_seconds: 1,
            ..Config::default()
        };
        let client = create_http_client(&config).unwrap();
        let result = fetch_page(&client, &club_url(&mock_server)).await;
        assert!(matches!(result, Err(AppError::NetworkTimeout { .. })));
        assert!(result.unwrap_err().is_network_error());
    }
}
