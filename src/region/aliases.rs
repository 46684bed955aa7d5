use anyhow::{Context, Result};
use std::collections::HashMap;
use tracing::{info, warn};

use super::lookup_code;

/// Extra country name → code entries for datasets that spell countries in
/// ways the built-in table does not know.
///
/// Stored as a plain JSON object on disk:
/// ```json
/// {
///   "Deutschland": "DE",
///   "Republic of Ireland": "IE"
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct CountryAliases {
    entries: HashMap<String, String>,
}

impl CountryAliases {
    /// Loads the aliases from a JSON file at `path`.
    ///
    /// Entries pointing at codes missing from the built-in table are kept but
    /// logged; the resolver skips them.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read country aliases from '{path}'"))?;
        let entries: HashMap<String, String> = serde_json::from_str(&content)
            .with_context(|| format!("'{path}' is not a JSON object of name -> code"))?;

        for (name, code) in &entries {
            if lookup_code(&code.trim().to_ascii_uppercase()).is_none() {
                warn!(name = %name, code = %code, "Alias points at an unknown country code");
            }
        }
        info!(path, count = entries.len(), "Country aliases loaded");

        Ok(Self { entries })
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Iterates over all `(name, code)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn temp_path(name: &str) -> String {
        format!("{}/{}", env::temp_dir().display(), name)
    }

    #[test]
    fn test_load_aliases_file() {
        let path = temp_path("summer_schools_test_aliases.json");
        fs::write(&path, r#"{"Deutschland": "DE", "Nowhere": "ZZ"}"#).unwrap();

        let aliases = CountryAliases::load(&path).unwrap();
        let mut pairs: Vec<_> = aliases.iter().collect();
        pairs.sort();
        assert_eq!(pairs, vec![("Deutschland", "DE"), ("Nowhere", "ZZ")]);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_rejects_non_object() {
        let path = temp_path("summer_schools_test_aliases_bad.json");
        fs::write(&path, r#"["DE"]"#).unwrap();

        assert!(CountryAliases::load(&path).is_err());

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_missing_file_errors() {
        let err = CountryAliases::load("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
