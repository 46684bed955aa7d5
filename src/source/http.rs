use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Url;
use tracing::{debug, info};

use super::{DataSource, parse_records};
use crate::records::RawRecord;

/// Downloads a whole response body. Implemented for [`reqwest::Client`];
/// tests and wrappers can stand in for it.
#[async_trait]
pub trait BodyFetcher: Send + Sync {
    /// GETs `url`. Non-2xx statuses are errors.
    async fn get_body(&self, url: &Url) -> Result<Vec<u8>>;
}

#[async_trait]
impl BodyFetcher for reqwest::Client {
    async fn get_body(&self, url: &Url) -> Result<Vec<u8>> {
        let resp = self.get(url.clone()).send().await?.error_for_status()?;
        debug!(status = %resp.status(), "Dataset response received");
        Ok(resp.bytes().await?.to_vec())
    }
}

/// Fetches the dataset over HTTP, e.g. a CSV published next to the site.
pub struct HttpCsvSource<F = reqwest::Client> {
    fetcher: F,
    url: String,
}

impl<F: BodyFetcher> HttpCsvSource<F> {
    pub fn new(fetcher: F, url: impl Into<String>) -> Self {
        Self {
            fetcher,
            url: url.into(),
        }
    }
}

#[async_trait]
impl<F: BodyFetcher> DataSource for HttpCsvSource<F> {
    async fn fetch_all(&self) -> Result<Vec<RawRecord>> {
        let url = Url::parse(&self.url)
            .with_context(|| format!("invalid dataset URL '{}'", self.url))?;
        let bytes = self
            .fetcher
            .get_body(&url)
            .await
            .with_context(|| format!("failed to fetch dataset from {}", self.url))?;
        let records = parse_records(&bytes)?;
        info!(url = %self.url, rows = records.len(), bytes = bytes.len(), "Dataset fetched");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves exactly one canned HTTP response and returns the base URL.
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: text/csv\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{addr}/summer_schools.csv")
    }

    /// Answers every request with the same body, without touching the network.
    struct CannedBody(&'static str);

    #[async_trait]
    impl BodyFetcher for CannedBody {
        async fn get_body(&self, _url: &Url) -> Result<Vec<u8>> {
            Ok(self.0.as_bytes().to_vec())
        }
    }

    #[tokio::test]
    async fn test_fetches_and_parses_csv() {
        let url = serve_once(
            "200 OK",
            "name,location,country,deadline,link\nTokyo Vision,Tokyo,Japan,15/06/2024,https://tokyo.example\n",
        )
        .await;

        let records = HttpCsvSource::new(reqwest::Client::new(), url)
            .fetch_all()
            .await
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Tokyo Vision");
    }

    #[tokio::test]
    async fn test_http_error_status_fails() {
        let url = serve_once("404 Not Found", "missing").await;

        let result = HttpCsvSource::new(reqwest::Client::new(), url)
            .fetch_all()
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_custom_fetcher() {
        let source = HttpCsvSource::new(
            CannedBody("name,location,country,deadline,link\nOxford ML,Oxford,UK,01/01/2024,https://ox.example\n"),
            "https://example.org/schools.csv",
        );
        let records = source.fetch_all().await.unwrap();
        assert_eq!(records[0].country, "UK");
    }

    #[tokio::test]
    async fn test_invalid_url_is_an_error() {
        let err = HttpCsvSource::new(CannedBody(""), "http//broken")
            .fetch_all()
            .await
            .unwrap_err();
        assert!(err.to_string().contains("http//broken"));
    }
}
