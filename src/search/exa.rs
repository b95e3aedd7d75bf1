use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{SearchHit, SearchProvider, SearchRequest};
use crate::error::ProviderError;

const PROVIDER: &str = "exa";

/// Search provider backed by the Exa `/search` endpoint with inline contents.
pub struct ExaSearch {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ExaSearch {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/search", self.base_url.trim_end_matches('/'))
    }

    fn build_body(request: &SearchRequest) -> ApiRequest<'_> {
        ApiRequest {
            query: &request.query,
            search_type: &request.filters.search_type,
            category: &request.filters.category,
            num_results: request.num_results,
            exclude_text: &request.filters.exclude_text,
            contents: Contents {
                summary: request.filters.summary,
            },
        }
    }
}

#[async_trait]
impl SearchProvider for ExaSearch {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<SearchHit>, ProviderError> {
        debug!(query = %request.query, num_results = request.num_results, "exa search");

        let resp = self
            .client
            .post(self.endpoint())
            .header("x-api-key", &self.api_key)
            .json(&Self::build_body(request))
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                provider: PROVIDER,
                status,
                body,
            });
        }

        let api_resp: ApiResponse = resp.json().await.map_err(|e| ProviderError::Decode {
            provider: PROVIDER,
            message: e.to_string(),
        })?;

        Ok(api_resp
            .results
            .into_iter()
            .map(|r| SearchHit {
                url: r.url,
                title: r.title,
                summary: r.summary,
            })
            .collect())
    }
}

// --- API types ---

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRequest<'a> {
    query: &'a str,
    #[serde(rename = "type")]
    search_type: &'a str,
    category: &'a str,
    num_results: usize,
    exclude_text: &'a [String],
    contents: Contents,
}

#[derive(Serialize)]
struct Contents {
    summary: bool,
}

#[derive(Deserialize)]
struct ApiResponse {
    results: Vec<ApiResult>,
}

#[derive(Deserialize)]
struct ApiResult {
    url: String,
    title: Option<String>,
    summary: Option<String>,
}
