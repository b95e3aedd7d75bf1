use async_trait::async_trait;
use std::sync::Mutex;

use super::{Completion, CompletionRequest, TextGenerator};
use crate::error::ProviderError;

/// A scripted generator for tests. Returns pre-defined replies in order and
/// records every request it receives.
pub struct MockGenerator {
    replies: Mutex<Vec<Result<Completion, ProviderError>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockGenerator {
    pub fn new(replies: Vec<Result<Completion, ProviderError>>) -> Self {
        let mut replies = replies;
        replies.reverse();
        Self {
            replies: Mutex::new(replies),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Convenience: every reply succeeds with the given text.
    pub fn with_texts(texts: &[&str]) -> Self {
        Self::new(texts.iter().map(|t| Ok(Completion::text(*t))).collect())
    }

    /// Requests received so far, in call order.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, ProviderError> {
        let call = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(request.clone());
            requests.len()
        };
        self.replies
            .lock()
            .unwrap()
            .pop()
            .unwrap_or_else(|| {
                Err(ProviderError::Decode {
                    provider: "mock",
                    message: format!("MockGenerator: no more replies (called {} times)", call),
                })
            })
    }
}
