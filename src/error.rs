//! Typed errors for the provider seams and the pipeline.

use thiserror::Error;

/// A failed call to a remote collaborator (search or generation).
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{provider} API error ({status}): {body}")]
    Api {
        provider: &'static str,
        status: u16,
        body: String,
    },

    #[error("{provider} API returned empty response")]
    EmptyResponse { provider: &'static str },

    #[error("failed to decode {provider} response: {message}")]
    Decode {
        provider: &'static str,
        message: String,
    },
}

/// Why a pipeline run did not produce a recommendation.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("query is empty")]
    EmptyQuery,

    #[error("Only safe, health-related queries are supported")]
    Rejected,

    #[error("search failed: {0}")]
    Retrieval(#[source] ProviderError),
}
