pub mod exa;
pub mod mock;

use async_trait::async_trait;

use crate::error::ProviderError;

/// Provider-side filters applied to every search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchFilters {
    /// Result category, e.g. `research paper`.
    pub category: String,
    /// Match mode, e.g. `keyword` or `neural`.
    pub search_type: String,
    /// Documents containing any of these strings are dropped by the provider.
    pub exclude_text: Vec<String>,
    /// Ask the provider for a pre-computed summary per document.
    pub summary: bool,
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            category: "research paper".to_string(),
            search_type: "keyword".to_string(),
            exclude_text: vec!["pdf".to_string()],
            summary: true,
        }
    }
}

/// A single search-and-summarize request.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub query: String,
    pub num_results: usize,
    pub filters: SearchFilters,
}

/// One ranked document as returned by the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub url: String,
    pub title: Option<String>,
    pub summary: Option<String>,
}

/// A remote (or scripted) search backend. Hits come back in rank order.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<SearchHit>, ProviderError>;
}
