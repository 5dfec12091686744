//! Catalogue sources: a local JSON file or an HTTP endpoint

use std::fmt;
use std::path::PathBuf;

use wayfarer_core::{Catalog, WayfarerError, WayfarerResult};

/// Relative path the catalogue is published under
pub const DEFAULT_CATALOG_PATH: &str = "travel_recommendation_api.json";

/// Where the catalogue document is read from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Http(String),
}

impl CatalogSource {
    /// `http://` and `https://` locations are fetched, anything else is a path
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        if location.starts_with("http://") || location.starts_with("https://") {
            CatalogSource::Http(location.to_string())
        } else {
            CatalogSource::File(PathBuf::from(location))
        }
    }

    /// Read and parse the catalogue. Called once per search; no retry.
    pub async fn load(&self) -> WayfarerResult<Catalog> {
        let catalog = match self {
            CatalogSource::File(path) => {
                let bytes = tokio::fs::read(path)
                    .await
                    .map_err(|e| WayfarerError::SourceUnavailable {
                        location: path.display().to_string(),
                        reason: e.to_string(),
                    })?;
                Catalog::from_slice(&bytes)?
            }
            CatalogSource::Http(url) => fetch(url).await?,
        };

        tracing::info!(source = %self, records = catalog.len(), "catalog loaded");
        Ok(catalog)
    }
}

impl Default for CatalogSource {
    fn default() -> Self {
        CatalogSource::File(PathBuf::from(DEFAULT_CATALOG_PATH))
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::File(path) => write!(f, "{}", path.display()),
            CatalogSource::Http(url) => f.write_str(url),
        }
    }
}

async fn fetch(url: &str) -> WayfarerResult<Catalog> {
    let response = reqwest::get(url)
        .await
        .map_err(|e| WayfarerError::TransportError(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(WayfarerError::HttpStatus {
            status: status.as_u16(),
            location: url.to_string(),
        });
    }

    response
        .json::<Catalog>()
        .await
        .map_err(|e| WayfarerError::InvalidDocument(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf).await;
            let response = format!(
                "{status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).await.unwrap();
        });

        format!("http://{addr}/travel_recommendation_api.json")
    }

    #[test]
    fn test_parse_location() {
        assert_eq!(
            CatalogSource::parse("https://example.org/api.json"),
            CatalogSource::Http("https://example.org/api.json".to_string())
        );
        assert_eq!(
            CatalogSource::parse(" data/api.json "),
            CatalogSource::File(PathBuf::from("data/api.json"))
        );
        assert_eq!(CatalogSource::default().to_string(), DEFAULT_CATALOG_PATH);
    }

    #[tokio::test]
    async fn test_missing_file() {
        let source = CatalogSource::parse("/nonexistent/wayfarer/api.json");
        let err = source.load().await.unwrap_err();
        assert!(matches!(err, WayfarerError::SourceUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_http_load() {
        let url = serve_once(
            "HTTP/1.1 200 OK",
            r#"{"recommendations":[{"name":"Bagan","country":"Myanmar","category":"Temple","description":"Plains of pagodas","imageUrl":"","priceRange":"$","bestTime":"November to February"}]}"#,
        )
        .await;

        let catalog = CatalogSource::parse(&url).load().await.unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.records()[0].country, "Myanmar");
    }

    #[tokio::test]
    async fn test_http_error_status() {
        let url = serve_once("HTTP/1.1 404 Not Found", "{}").await;

        let err = CatalogSource::parse(&url).load().await.unwrap_err();
        assert!(matches!(err, WayfarerError::HttpStatus { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_http_bad_document() {
        let url = serve_once("HTTP/1.1 200 OK", r#"{"items": 3}"#).await;

        let err = CatalogSource::parse(&url).load().await.unwrap_err();
        assert!(matches!(err, WayfarerError::InvalidDocument(_)));
    }
}
