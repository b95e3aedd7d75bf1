//! Run configuration: provider endpoints and credentials from the
//! environment, everything else from defaults or CLI flags.
//!
//! Credentials are read once here and injected into the provider clients;
//! nothing else in the crate touches the environment.

use anyhow::{Context, Result};
use std::path::Path;

use crate::consts::{
    DEFAULT_EXA_BASE_URL, DEFAULT_MAX_RESULTS, DEFAULT_MODEL, DEFAULT_OPENAI_BASE_URL,
    EXA_API_KEY_VAR, EXA_BASE_URL_VAR, OPENAI_API_KEY_VAR, OPENAI_BASE_URL_VAR,
};
use crate::engine::admission::AllowList;
use crate::search::SearchFilters;

/// Where a provider lives and how to authenticate with it.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    pub base_url: String,
    /// Empty when the variable is unset; the provider will reject it.
    pub api_key: String,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub model: String,
    pub max_results: usize,
    pub allow_list: AllowList,
    pub filters: SearchFilters,
    pub search: Endpoint,
    pub generation: Endpoint,
}

impl Settings {
    /// Defaults plus whatever the process environment provides.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            model: DEFAULT_MODEL.to_string(),
            max_results: DEFAULT_MAX_RESULTS,
            allow_list: AllowList::default(),
            filters: SearchFilters::default(),
            search: Endpoint {
                base_url: non_empty(EXA_BASE_URL_VAR)
                    .unwrap_or_else(|| DEFAULT_EXA_BASE_URL.to_string()),
                api_key: lookup(EXA_API_KEY_VAR).unwrap_or_default(),
            },
            generation: Endpoint {
                base_url: non_empty(OPENAI_BASE_URL_VAR)
                    .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
                api_key: lookup(OPENAI_API_KEY_VAR).unwrap_or_default(),
            },
        }
    }
}

/// Read an allow-list file: one term per line, `#` starts a comment line.
pub fn load_allow_list(path: &Path) -> Result<AllowList> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read keyword file {}", path.display()))?;
    let terms = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'));
    Ok(AllowList::new(terms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let settings = Settings::from_lookup(|_| None);
        assert_eq!(settings.model, DEFAULT_MODEL);
        assert_eq!(settings.max_results, 5);
        assert_eq!(settings.search.base_url, DEFAULT_EXA_BASE_URL);
        assert_eq!(settings.generation.base_url, DEFAULT_OPENAI_BASE_URL);
        assert!(settings.search.api_key.is_empty());
        assert!(settings.generation.api_key.is_empty());
        assert!(settings.allow_list.matches("cholesterol").is_some());
    }

    #[test]
    fn credentials_and_endpoints_from_environment() {
        let settings = Settings::from_lookup(lookup_from(&[
            (EXA_API_KEY_VAR, "exa-key"),
            (OPENAI_API_KEY_VAR, "sk-test"),
            (OPENAI_BASE_URL_VAR, "http://127.0.0.1:9999/v1"),
        ]));
        assert_eq!(settings.search.api_key, "exa-key");
        assert_eq!(settings.generation.api_key, "sk-test");
        assert_eq!(settings.generation.base_url, "http://127.0.0.1:9999/v1");
        assert_eq!(settings.search.base_url, DEFAULT_EXA_BASE_URL);
    }

    #[test]
    fn blank_base_url_falls_back_to_default() {
        let settings = Settings::from_lookup(lookup_from(&[(EXA_BASE_URL_VAR, "  ")]));
        assert_eq!(settings.search.base_url, DEFAULT_EXA_BASE_URL);
    }

    #[test]
    fn default_filters_match_research_papers() {
        let settings = Settings::from_lookup(|_| None);
        assert_eq!(settings.filters.category, "research paper");
        assert_eq!(settings.filters.search_type, "keyword");
        assert_eq!(settings.filters.exclude_text, vec!["pdf".to_string()]);
        assert!(settings.filters.summary);
    }

    #[test]
    fn load_allow_list_skips_comments_and_blanks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keywords.txt");
        std::fs::write(&path, "# sleep topics\nSleep\n\n  Insomnia  \n# end\n").unwrap();

        let list = load_allow_list(&path).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.matches("chronic insomnia help"), Some("insomnia"));
        assert_eq!(list.matches("SLEEP apnea"), Some("sleep"));
        assert!(list.matches("cholesterol").is_none());
    }

    #[test]
    fn load_allow_list_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_allow_list(&dir.path().join("nope.txt")).unwrap_err();
        assert!(err.to_string().contains("failed to read keyword file"));
    }
}
