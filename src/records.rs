//! Program records as read from the dataset and as enriched for display.

use serde::{Deserialize, Deserializer, Serialize};

use crate::deadline::Deadline;
use crate::region::CountryInfo;

/// One summer-school program, exactly as it appears in the dataset.
///
/// `name` is the identity of a record: it is the render key and the
/// secondary sort key, so it must be unique within one listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub name: String,
    pub location: String,
    pub country: String,
    #[serde(default)]
    pub date_start: String,
    #[serde(default)]
    pub date_end: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub cost: Option<String>,
    pub deadline: String,
    pub link: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub note: Option<String>,
}

/// A [`RawRecord`] plus everything derived from it for one transform call.
///
/// Never persisted; rebuilt whenever the reference instant changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedRecord {
    #[serde(flatten)]
    pub record: RawRecord,
    pub deadline_instant: Deadline,
    pub is_open: bool,
    pub country_info: Option<CountryInfo>,
}

impl EnrichedRecord {
    pub fn name(&self) -> &str {
        &self.record.name
    }

    /// Flag glyph for display, empty when the country did not resolve.
    pub fn emoji(&self) -> &str {
        self.country_info
            .as_ref()
            .map(|info| info.emoji.as_str())
            .unwrap_or("")
    }
}

// CSV cells are never missing, only empty.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}
