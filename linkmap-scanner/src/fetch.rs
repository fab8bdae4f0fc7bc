use crate::error::{FetchError, Result};
use crate::extract::extract_hrefs;
use crate::result::PageScan;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use url::Url;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Fetches a single page and extracts its anchor links.
pub struct Scanner {
    client: Client,
}

impl Scanner {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(timeout_secs: u64) -> Self {
        let client = Client::builder()
            .user_agent(concat!(
                "linkmap/",
                env!("CARGO_PKG_VERSION"),
                " (https://github.com/linkmap-rs/linkmap)"
            ))
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.div_ceil(2)))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// GET the page and return its metadata plus raw hrefs.
    ///
    /// Extraction is skipped with a warning when the server reports a
    /// non-HTML content type; a missing content type is treated as HTML.
    pub async fn scan(&self, url: &str) -> Result<PageScan> {
        Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", url, e)))?;

        debug!("Fetching {}", url);
        let start = Instant::now();
        let response = self.send_with_retry(url).await?;
        let response_time = start.elapsed();

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());
        let content_length = response.content_length();
        let body = response.text().await?;

        let mut scan = PageScan::new(url.to_string());
        scan.status_code = status.as_u16();
        scan.content_type = content_type.clone();
        scan.content_length = content_length;
        scan.response_time = response_time;

        if treat_as_html(content_type.as_deref()) {
            scan.hrefs = extract_hrefs(&body);
        } else {
            warn!("{} is not text/html, skipping link extraction", url);
        }

        Ok(scan)
    }

    // One retry on transient transport failures, everything else is final.
    async fn send_with_retry(&self, url: &str) -> Result<reqwest::Response> {
        match self.client.get(url).send().await {
            Ok(response) => Ok(response),
            Err(e) if e.is_connect() || e.is_timeout() => {
                warn!("Transient error fetching {}: {}, retrying once", url, e);
                Ok(self.client.get(url).send().await?)
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

// A missing content type is treated as HTML; hand-maintained servers
// do not always send one.
fn treat_as_html(content_type: Option<&str>) -> bool {
    content_type
        .map(|ct| ct.contains("text/html"))
        .unwrap_or(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    #[tokio::test]
    async fn scan_extracts_links_in_document_order() {
        let mock_server = MockServer::start().await;

        let html = r#"<html><body>
            <a href="page1.html">Page 1</a>
            <a href="/absolute">Absolute</a>
            <a href="https://elsewhere.test/off-site">Off-site</a>
        </body></html>"#;

        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "text/html")
                    .set_body_bytes(html.as_bytes()),
            )
            .mount(&mock_server)
            .await;

        let scanner = Scanner::new();
        let scan = scanner.scan(&mock_server.uri()).await.unwrap();

        assert_eq!(scan.status_code, 200);
        assert_eq!(
            scan.hrefs,
            vec!["page1.html", "/absolute", "https://elsewhere.test/off-site"]
        );
    }

    #[tokio::test]
    async fn scan_records_response_metadata() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/index.html"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "text/html; charset=utf-8")
                    .set_body_bytes(b"<html><body></body></html>"),
            )
            .mount(&mock_server)
            .await;

        let url = format!("{}/index.html", mock_server.uri());
        let scan = Scanner::new().scan(&url).await.unwrap();

        assert_eq!(scan.url, url);
        assert_eq!(scan.status_code, 200);
        assert_eq!(
            scan.content_type.as_deref(),
            Some("text/html; charset=utf-8")
        );
        assert!(scan.hrefs.is_empty());
    }

    #[tokio::test]
    async fn scan_fails_on_http_error_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let url = format!("{}/missing", mock_server.uri());
        let result = Scanner::new().scan(&url).await;

        assert!(matches!(
            result,
            Err(FetchError::Status { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn scan_skips_extraction_for_non_html() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/feed"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_bytes(br#"{"link": "<a href='trap.html'>"}"#),
            )
            .mount(&mock_server)
            .await;

        let url = format!("{}/feed", mock_server.uri());
        let scan = Scanner::new().scan(&url).await.unwrap();

        assert!(scan.hrefs.is_empty());
    }

    #[test]
    fn missing_content_type_is_treated_as_html() {
        assert!(treat_as_html(None));
        assert!(treat_as_html(Some("text/html")));
        assert!(treat_as_html(Some("text/html; charset=utf-8")));
        assert!(!treat_as_html(Some("application/json")));
        assert!(!treat_as_html(Some("application/octet-stream")));
    }

    #[tokio::test]
    async fn scan_rejects_invalid_url() {
        let result = Scanner::new().scan("not a url").await;
        assert!(matches!(result, Err(FetchError::InvalidUrl(_))));
    }
}
