//! Country → region resolution.
//!
//! A program's `country` cell may hold a full country name ("France",
//! "united states of america") or a code ("FR"). [`RegionResolver`] first
//! translates names to codes, falls back to treating the value as a code, and
//! then looks the code up in the built-in country table.
//!
//! [`CountryAliases`] adds extra name → code entries on top of the built-in
//! tables.

mod aliases;
mod countries;

pub use aliases::CountryAliases;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;
use tracing::trace;

use countries::{COUNTRIES, Country, NAME_ALIASES};

/// Coarse geographic region used for grouping and filtering.
///
/// Serialized as its two-letter code. The derived [`Ord`] matches the
/// lexicographic order of those codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Continent {
    #[serde(rename = "AF")]
    Africa,
    #[serde(rename = "AN")]
    Antarctica,
    #[serde(rename = "AS")]
    Asia,
    #[serde(rename = "EU")]
    Europe,
    #[serde(rename = "NA")]
    NorthAmerica,
    #[serde(rename = "OC")]
    Oceania,
    #[serde(rename = "SA")]
    SouthAmerica,
}

impl Continent {
    /// Two-letter region code, the value used in the `region` filter.
    pub fn code(&self) -> &'static str {
        match self {
            Continent::Africa => "AF",
            Continent::Antarctica => "AN",
            Continent::Asia => "AS",
            Continent::Europe => "EU",
            Continent::NorthAmerica => "NA",
            Continent::Oceania => "OC",
            Continent::SouthAmerica => "SA",
        }
    }

    /// Human-readable label for filter controls.
    pub fn name(&self) -> &'static str {
        match self {
            Continent::Africa => "Africa",
            Continent::Antarctica => "Antarctica",
            Continent::Asia => "Asia",
            Continent::Europe => "Europe",
            Continent::NorthAmerica => "North America",
            Continent::Oceania => "Oceania",
            Continent::SouthAmerica => "South America",
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Display data for a resolved country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub continent: Continent,
    pub emoji: String,
}

impl CountryInfo {
    fn from_country(country: &Country) -> Self {
        Self {
            code: country.code,
            name: country.name,
            continent: country.continent,
            emoji: flag_emoji(country.code),
        }
    }
}

/// Lazily-built code → country map.
static CODE_MAP: OnceLock<HashMap<&'static str, &'static Country>> = OnceLock::new();

/// Lazily-built lower-case name → code map, covering short names and aliases.
static NAME_MAP: OnceLock<HashMap<String, &'static str>> = OnceLock::new();

fn code_map() -> &'static HashMap<&'static str, &'static Country> {
    CODE_MAP.get_or_init(|| COUNTRIES.iter().map(|c| (c.code, c)).collect())
}

fn name_map() -> &'static HashMap<String, &'static str> {
    NAME_MAP.get_or_init(|| {
        let mut map = HashMap::with_capacity(COUNTRIES.len() + NAME_ALIASES.len());
        for country in COUNTRIES {
            map.insert(country.name.to_lowercase(), country.code);
        }
        for (name, code) in NAME_ALIASES {
            map.insert((*name).to_string(), *code);
        }
        map
    })
}

/// Returns the built-in entry for an upper-case country code.
pub fn lookup_code(code: &str) -> Option<CountryInfo> {
    code_map().get(code).map(|c| CountryInfo::from_country(c))
}

/// Resolves a `country` cell with the built-in tables only.
pub fn resolve_country(country: &str) -> Option<CountryInfo> {
    RegionResolver::default().resolve(country)
}

/// Name/code → [`CountryInfo`] resolver.
///
/// Pure lookup: unknown countries resolve to `None` and never error.
#[derive(Debug, Clone, Default)]
pub struct RegionResolver {
    aliases: HashMap<String, &'static str>,
}

impl RegionResolver {
    /// Layers user aliases over the built-in name table. Aliases win.
    pub fn with_aliases(aliases: &CountryAliases) -> Self {
        let aliases = aliases
            .iter()
            .filter_map(|(name, code)| {
                let info = lookup_code(&code.trim().to_ascii_uppercase())?;
                Some((normalize_name(name), info.code))
            })
            .collect();
        Self { aliases }
    }

    /// Translates a name to a code, or passes the value through as a code.
    pub fn code_for(&self, country: &str) -> String {
        let key = normalize_name(country);
        self.aliases
            .get(&key)
            .or_else(|| name_map().get(&key))
            .map(|code| (*code).to_string())
            .unwrap_or_else(|| country.trim().to_ascii_uppercase())
    }

    pub fn resolve(&self, country: &str) -> Option<CountryInfo> {
        let code = self.code_for(country);
        let info = lookup_code(&code);
        if info.is_none() {
            trace!(country, code = %code, "Country did not resolve");
        }
        info
    }
}

fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Builds the regional-indicator flag for a two-letter code.
fn flag_emoji(code: &str) -> String {
    code.chars()
        .filter(|c| c.is_ascii_uppercase())
        .filter_map(|c| char::from_u32(0x1F1E6 + (c as u32 - 'A' as u32)))
        .collect()
}
