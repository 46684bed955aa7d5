//! Region filter value and the controller that keeps it in sync with the
//! shareable query string.

use reqwest::Url;
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

use crate::region::Continent;

/// Query-string key holding the selected region.
pub const REGION_PARAM: &str = "region";

/// Query value meaning "no filtering".
pub const ALL: &str = "all";

/// Which records a listing keeps.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum RegionFilter {
    #[default]
    All,
    /// A region code. Codes that no record carries select nothing.
    Region(String),
}

impl RegionFilter {
    /// Absent, empty and `"all"` all mean [`RegionFilter::All`].
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") | Some(ALL) => RegionFilter::All,
            Some(code) => RegionFilter::Region(code.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RegionFilter::All => ALL,
            RegionFilter::Region(code) => code,
        }
    }

    /// Whether a record in `continent` passes. Unresolved records
    /// (`None`) pass only [`RegionFilter::All`].
    pub fn matches(&self, continent: Option<Continent>) -> bool {
        match self {
            RegionFilter::All => true,
            RegionFilter::Region(code) => continent.is_some_and(|c| c.code() == code.as_str()),
        }
    }
}

impl From<Continent> for RegionFilter {
    fn from(continent: Continent) -> Self {
        RegionFilter::Region(continent.code().to_string())
    }
}

impl fmt::Display for RegionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RegionFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Key/value state the filter is read from and mirrored into.
pub trait QueryState {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

impl QueryState for Url {
    fn get(&self, key: &str) -> Option<String> {
        self.query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    /// Replaces every `key` pair with one `key=value`, keeping other pairs in order.
    fn set(&mut self, key: &str, value: &str) {
        let others: Vec<(String, String)> = self
            .query_pairs()
            .filter(|(k, _)| k != key)
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        let mut pairs = self.query_pairs_mut();
        pairs.clear();
        for (k, v) in &others {
            pairs.append_pair(k, v);
        }
        pairs.append_pair(key, value);
    }
}

impl QueryState for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.insert(key.to_string(), value.to_string());
    }
}

/// Holds the selected region and writes every change back to `Q`.
///
/// This is the only state that survives between listings.
#[derive(Debug, Clone)]
pub struct FilterController<Q> {
    region: RegionFilter,
    query: Q,
}

impl<Q: QueryState> FilterController<Q> {
    /// Reads the initial filter from the `region` parameter, defaulting to all.
    pub fn new(query: Q) -> Self {
        let region = RegionFilter::parse(query.get(REGION_PARAM).as_deref());
        debug!(region = %region, "Initial region filter");
        Self { region, query }
    }

    pub fn region(&self) -> &RegionFilter {
        &self.region
    }

    pub fn query(&self) -> &Q {
        &self.query
    }

    pub fn into_query(self) -> Q {
        self.query
    }

    /// Records a user selection and mirrors it into the query state.
    pub fn select(&mut self, region: RegionFilter) {
        debug!(from = %self.region, to = %region, "Region filter changed");
        self.query.set(REGION_PARAM, region.as_str());
        self.region = region;
    }
}
