//! Initial configuration for a listing run.
//!
//! Everything the listing needs from its surroundings (where the data lives,
//! the starting region, an optional fixed "now") is collected here once and
//! passed in explicitly. Values come from the process environment (after
//! `.env` is loaded by the binary) and can be overridden by CLI flags.

use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, NaiveDate, Utc};
use reqwest::Url;
use std::collections::HashMap;
use tracing::info;

use crate::filter::{FilterController, QueryState, REGION_PARAM, RegionFilter};

pub const DATA_VAR: &str = "SUMMER_SCHOOLS_DATA";
pub const REGION_VAR: &str = "SUMMER_SCHOOLS_REGION";
pub const NOW_VAR: &str = "SUMMER_SCHOOLS_NOW";
pub const ALIASES_VAR: &str = "SUMMER_SCHOOLS_ALIASES";
pub const PAGE_URL_VAR: &str = "SUMMER_SCHOOLS_PAGE_URL";

pub const DEFAULT_DATA: &str = "data/summer_schools.csv";

#[derive(Debug, Clone)]
pub struct ListingConfig {
    /// File path or `http(s)://` URL of the dataset.
    pub data: String,
    /// Starting region when no page URL carries one.
    pub region: RegionFilter,
    /// Fixed reference instant; the wall clock when absent.
    pub now: Option<DateTime<Utc>>,
    /// Optional JSON file of extra country aliases.
    pub aliases: Option<String>,
    /// Shareable page URL whose `region` parameter seeds and mirrors the filter.
    pub page_url: Option<Url>,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            data: DEFAULT_DATA.to_string(),
            region: RegionFilter::All,
            now: None,
            aliases: None,
            page_url: None,
        }
    }
}

impl ListingConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key/value lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let now = get(NOW_VAR)
            .map(|v| parse_reference(&v).with_context(|| format!("invalid {NOW_VAR}")))
            .transpose()?;
        let page_url = get(PAGE_URL_VAR)
            .map(|v| Url::parse(&v).with_context(|| format!("invalid {PAGE_URL_VAR} '{v}'")))
            .transpose()?;

        Ok(Self {
            data: get(DATA_VAR).unwrap_or_else(|| DEFAULT_DATA.to_string()),
            region: RegionFilter::parse(get(REGION_VAR).as_deref()),
            now,
            aliases: get(ALIASES_VAR),
            page_url,
        })
    }

    /// The instant open/closed is judged against for this run.
    pub fn reference_instant(&self) -> DateTime<Utc> {
        self.now.unwrap_or_else(Utc::now)
    }

    /// The injected key/value state a filter controller starts from.
    pub fn query_state(&self) -> HashMap<String, String> {
        HashMap::from([(REGION_PARAM.to_string(), self.region.as_str().to_string())])
    }

    /// Decides the filter for this run and the shareable URL that reproduces it.
    ///
    /// Precedence: an explicit `selection`, then the page URL's `region`
    /// parameter, then [`ListingConfig::region`]. When a page URL is
    /// configured it always ends up carrying the effective region.
    pub fn select_region(&self, selection: Option<RegionFilter>) -> (RegionFilter, Option<Url>) {
        match &self.page_url {
            Some(url) => {
                let mut controller = FilterController::new(url.clone());
                match selection {
                    Some(region) => controller.select(region),
                    None if url.get(REGION_PARAM).is_none() => {
                        controller.select(self.region.clone())
                    }
                    None => {}
                }
                info!(region = %controller.region(), "Region selected");
                (controller.region().clone(), Some(controller.into_query()))
            }
            None => {
                let mut controller = FilterController::new(self.query_state());
                if let Some(region) = selection {
                    controller.select(region);
                }
                info!(region = %controller.region(), "Region selected");
                (controller.region().clone(), None)
            }
        }
    }
}

/// Accepts RFC 3339 timestamps or plain `YYYY-MM-DD` dates (midnight UTC).
pub fn parse_reference(value: &str) -> Result<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(value) {
        return Ok(at.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| anyhow!("'{value}' is neither RFC 3339 nor YYYY-MM-DD"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ListingConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.data, DEFAULT_DATA);
        assert_eq!(config.region, RegionFilter::All);
        assert!(config.now.is_none());
        assert!(config.aliases.is_none());
        assert!(config.page_url.is_none());
    }

    #[test]
    fn test_reads_all_values() {
        let config = ListingConfig::from_lookup(lookup(&[
            (DATA_VAR, "https://example.org/schools.csv"),
            (REGION_VAR, "EU"),
            (NOW_VAR, "2024-01-01"),
            (ALIASES_VAR, "aliases.json"),
            (PAGE_URL_VAR, "https://example.org/?region=AS"),
        ]))
        .unwrap();

        assert_eq!(config.data, "https://example.org/schools.csv");
        assert_eq!(config.region, RegionFilter::Region("EU".to_string()));
        assert_eq!(
            config.reference_instant(),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(config.aliases.as_deref(), Some("aliases.json"));
        assert_eq!(config.page_url.unwrap().query(), Some("region=AS"));
    }

    #[test]
    fn test_empty_values_are_unset() {
        let config =
            ListingConfig::from_lookup(lookup(&[(REGION_VAR, ""), (DATA_VAR, "  ")])).unwrap();
        assert_eq!(config.region, RegionFilter::All);
        assert_eq!(config.data, DEFAULT_DATA);
    }

    #[test]
    fn test_invalid_now_is_an_error() {
        let err = ListingConfig::from_lookup(lookup(&[(NOW_VAR, "yesterday")])).unwrap_err();
        assert!(err.to_string().contains(NOW_VAR));
    }

    #[test]
    fn test_parse_reference_formats() {
        assert_eq!(
            parse_reference("2024-03-01T12:30:00+02:00").unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 1, 10, 30, 0).unwrap()
        );
        assert_eq!(
            parse_reference("2024-03-01").unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()
        );
        assert!(parse_reference("01/03/2024").is_err());
    }

    #[test]
    fn test_query_state_carries_region() {
        let config = ListingConfig {
            region: RegionFilter::Region("OC".to_string()),
            ..Default::default()
        };
        assert_eq!(config.query_state().get(REGION_PARAM).map(String::as_str), Some("OC"));
    }

    fn with_page(region: &str, page: &str) -> ListingConfig {
        ListingConfig {
            region: RegionFilter::parse(Some(region)),
            page_url: Some(Url::parse(page).unwrap()),
            ..Default::default()
        }
    }

    #[test]
    fn test_select_without_page_url_uses_config_region() {
        let config = ListingConfig {
            region: RegionFilter::Region("EU".to_string()),
            ..Default::default()
        };
        let (filter, url) = config.select_region(None);
        assert_eq!(filter.as_str(), "EU");
        assert!(url.is_none());

        let (filter, _) = config.select_region(Some(RegionFilter::All));
        assert_eq!(filter, RegionFilter::All);
    }

    #[test]
    fn test_page_url_region_beats_config_region() {
        let config = with_page("EU", "https://example.org/?region=AS");
        let (filter, url) = config.select_region(None);
        assert_eq!(filter.as_str(), "AS");
        assert_eq!(url.unwrap().as_str(), "https://example.org/?region=AS");
    }

    #[test]
    fn test_page_url_without_region_falls_back_to_config() {
        let config = with_page("EU", "https://example.org/?lang=en");
        let (filter, url) = config.select_region(None);
        assert_eq!(filter.as_str(), "EU");
        assert_eq!(url.unwrap().as_str(), "https://example.org/?lang=en&region=EU");
    }

    #[test]
    fn test_selection_overrides_page_url_and_rewrites_it() {
        let config = with_page("EU", "https://example.org/?region=AS&lang=en");
        let (filter, url) = config.select_region(Some(RegionFilter::Region("OC".to_string())));
        assert_eq!(filter.as_str(), "OC");
        assert_eq!(url.unwrap().as_str(), "https://example.org/?lang=en&region=OC");

        let (filter, url) = config.select_region(Some(RegionFilter::All));
        assert_eq!(filter, RegionFilter::All);
        assert_eq!(url.unwrap().as_str(), "https://example.org/?lang=en&region=all");
    }
}
