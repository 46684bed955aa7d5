use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

use super::{DataSource, parse_records};
use crate::records::RawRecord;

/// Reads the dataset from a local CSV (or `.csv.gz`) file.
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl DataSource for CsvFileSource {
    async fn fetch_all(&self) -> Result<Vec<RawRecord>> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .with_context(|| format!("failed to read dataset '{}'", self.path.display()))?;
        let records = parse_records(&bytes)?;
        info!(path = %self.path.display(), rows = records.len(), "Dataset loaded from file");
        Ok(records)
    }
}
