use async_trait::async_trait;
use std::sync::Mutex;

use super::{SearchHit, SearchProvider, SearchRequest};
use crate::error::ProviderError;

/// A canned search provider for tests. Returns the same ranked hits for
/// every query (or a fixed error) and records each request.
pub struct MockSearch {
    hits: Result<Vec<SearchHit>, String>,
    requests: Mutex<Vec<SearchRequest>>,
}

impl MockSearch {
    pub fn new(hits: Vec<SearchHit>) -> Self {
        Self {
            hits: Ok(hits),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// A provider whose every call fails with an API error carrying `body`.
    pub fn failing(body: &str) -> Self {
        Self {
            hits: Err(body.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// `count` hits titled `title 1..=count`, each with a summary.
    pub fn numbered(count: usize) -> Self {
        Self::new(
            (1..=count)
                .map(|i| SearchHit {
                    url: format!("https://example.org/{i}"),
                    title: Some(format!("title {i}")),
                    summary: Some(format!("summary {i}")),
                })
                .collect(),
        )
    }

    pub fn requests(&self) -> Vec<SearchRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl SearchProvider for MockSearch {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<SearchHit>, ProviderError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.hits {
            Ok(hits) => Ok(hits.clone()),
            Err(body) => Err(ProviderError::Api {
                provider: "mock",
                status: 500,
                body: body.clone(),
            }),
        }
    }
}
