use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::{Completion, CompletionRequest, TextGenerator, TokenUsage};
use crate::error::ProviderError;

/// Wraps a generator and totals the token usage of every successful call.
pub struct MeteredGenerator {
    inner: Arc<dyn TextGenerator>,
    usage: Mutex<TokenUsage>,
}

impl MeteredGenerator {
    pub fn new(inner: Arc<dyn TextGenerator>) -> Self {
        Self {
            inner,
            usage: Mutex::new(TokenUsage::default()),
        }
    }

    pub fn usage(&self) -> TokenUsage {
        *self.usage.lock().unwrap()
    }
}

#[async_trait]
impl TextGenerator for MeteredGenerator {
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, ProviderError> {
        let completion = self.inner.complete(request).await?;
        if let Some(usage) = completion.usage {
            self.usage.lock().unwrap().add(usage);
        }
        Ok(completion)
    }
}
