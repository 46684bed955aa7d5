//! Decoder for the summer-school dataset (CSV, optionally gzip-compressed).

use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use std::io::Read;
use tracing::debug;

use crate::records::RawRecord;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Decodes dataset bytes into records, gunzipping first when the bytes are
/// gzip-compressed.
///
/// # Errors
///
/// Returns an error if the gzip stream is corrupt, a row cannot be
/// deserialized, or a required column is missing.
pub fn parse_records(bytes: &[u8]) -> Result<Vec<RawRecord>> {
    if bytes.starts_with(&GZIP_MAGIC) {
        let mut decoded = Vec::new();
        GzDecoder::new(bytes)
            .read_to_end(&mut decoded)
            .context("failed to gunzip dataset")?;
        debug!(compressed = bytes.len(), decoded = decoded.len(), "Dataset gunzipped");
        return parse_csv(&decoded);
    }
    parse_csv(bytes)
}

fn parse_csv(bytes: &[u8]) -> Result<Vec<RawRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let mut records = Vec::new();
    for (i, result) in rdr.deserialize().enumerate() {
        // Row 1 is the header.
        let record: RawRecord = result.with_context(|| format!("invalid dataset row {}", i + 2))?;
        records.push(record);
    }

    debug!(rows = records.len(), "Dataset parsed");
    Ok(records)
}
