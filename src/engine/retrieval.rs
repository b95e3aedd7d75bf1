use std::sync::Arc;

use tracing::info;

use crate::error::ProviderError;
use crate::search::{SearchFilters, SearchHit, SearchProvider, SearchRequest};

/// A retrieved document, projected from the provider's hit.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub url: String,
    pub title: String,
    pub summary: String,
}

impl SearchResult {
    pub fn summary_pair(&self) -> SummaryPair {
        SummaryPair {
            title: self.title.clone(),
            summary: self.summary.clone(),
        }
    }
}

impl From<SearchHit> for SearchResult {
    fn from(hit: SearchHit) -> Self {
        Self {
            url: hit.url,
            title: hit.title.unwrap_or_default(),
            summary: hit.summary.unwrap_or_default(),
        }
    }
}

/// The unit the aggregation stage works on.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryPair {
    pub title: String,
    pub summary: String,
}

/// One search per query, at most `max_results` hits kept in provider order.
pub struct Retriever {
    provider: Arc<dyn SearchProvider>,
    filters: SearchFilters,
    max_results: usize,
}

impl Retriever {
    pub fn new(provider: Arc<dyn SearchProvider>, filters: SearchFilters, max_results: usize) -> Self {
        Self {
            provider,
            filters,
            max_results,
        }
    }

    pub async fn retrieve(&self, query: &str) -> Result<Vec<SearchResult>, ProviderError> {
        let request = SearchRequest {
            query: query.to_string(),
            num_results: self.max_results,
            filters: self.filters.clone(),
        };

        let hits = self.provider.search(&request).await?;
        let returned = hits.len();
        let results: Vec<SearchResult> = hits
            .into_iter()
            .take(self.max_results)
            .map(SearchResult::from)
            .collect();

        info!(returned, kept = results.len(), "search complete");
        Ok(results)
    }
}
