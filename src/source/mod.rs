//! Where program records come from.
//!
//! The transform only needs the full record set up front; [`DataSource`]
//! hides whether that set is read from a local file, fetched over HTTP, or
//! supplied in memory.

mod dataset;
mod file;
mod http;

pub use dataset::parse_records;
pub use file::CsvFileSource;
pub use http::{BodyFetcher, HttpCsvSource};

use anyhow::Result;

use crate::records::RawRecord;

/// Supplies the complete, ordered record set.
#[async_trait::async_trait]
pub trait DataSource: Send + Sync {
    /// Returns every record in dataset order.
    async fn fetch_all(&self) -> Result<Vec<RawRecord>>;
}

/// In-memory records, mainly for fixtures.
#[derive(Debug, Clone, Default)]
pub struct StaticSource(pub Vec<RawRecord>);

#[async_trait::async_trait]
impl DataSource for StaticSource {
    async fn fetch_all(&self) -> Result<Vec<RawRecord>> {
        Ok(self.0.clone())
    }
}

/// Picks an HTTP source for `http(s)://` locations and a file source otherwise.
pub fn source_for(location: &str) -> Box<dyn DataSource> {
    if location.starts_with("http") {
        Box::new(HttpCsvSource::new(reqwest::Client::new(), location))
    } else {
        Box::new(CsvFileSource::new(location))
    }
}
