use std::sync::Arc;

use tracing::{info, warn};

use super::retrieval::SummaryPair;
use crate::consts::{SUMMARY_MAX_TOKENS, SUMMARY_TEMPERATURE};
use crate::generator::{CompletionRequest, TextGenerator};

const INSTRUCTIONS: &str = "Combine these summaries and provide dietary recommendations. \
    Focus on health-related content only. Extract health context from the articles \
    and suggest practical ways to address the issues mentioned.\n";

/// `title: summary` blocks separated by blank lines, in input order.
pub fn combine(pairs: &[SummaryPair]) -> String {
    pairs
        .iter()
        .map(|p| format!("{}: {}", p.title, p.summary))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn build_prompt(pairs: &[SummaryPair]) -> String {
    format!("{INSTRUCTIONS}{}", combine(pairs))
}

/// Turns a batch of per-document summaries into one recommendation.
pub struct Aggregator {
    generator: Arc<dyn TextGenerator>,
    model: String,
}

impl Aggregator {
    pub fn new(generator: Arc<dyn TextGenerator>, model: String) -> Self {
        Self { generator, model }
    }

    /// Always returns text. A provider failure is reported in-band.
    pub async fn recommend(&self, pairs: &[SummaryPair]) -> String {
        let request = CompletionRequest {
            model: self.model.clone(),
            prompt: build_prompt(pairs),
            max_tokens: SUMMARY_MAX_TOKENS,
            temperature: SUMMARY_TEMPERATURE,
        };

        match self.generator.complete(&request).await {
            Ok(completion) => {
                info!(documents = pairs.len(), "recommendation generated");
                completion.text.trim().to_string()
            }
            Err(e) => {
                warn!(error = %e, "summarization failed");
                format!("[Error during summarization: {e}]")
            }
        }
    }
}
