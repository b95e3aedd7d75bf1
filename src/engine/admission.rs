//! Admission filter: keeps off-topic and unsafe queries away from the paid
//! search and generation calls.
//!
//! A cheap keyword check runs first. Only when no allow-listed term appears
//! in the query is the classifier consulted, and any classifier failure
//! counts as a rejection.

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{debug, info};

use crate::consts::{CLASSIFIER_MAX_TOKENS, CLASSIFIER_TEMPERATURE, DEFAULT_HEALTH_KEYWORDS};
use crate::generator::{CompletionRequest, TextGenerator};

/// Normalized (trimmed, lower-cased) domain terms.
#[derive(Debug, Clone, PartialEq)]
pub struct AllowList {
    terms: BTreeSet<String>,
}

impl AllowList {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms = terms
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        Self { terms }
    }

    /// The first term (in sorted order) that occurs in `query`, ignoring case.
    pub fn matches(&self, query: &str) -> Option<&str> {
        let query = query.to_lowercase();
        self.terms
            .iter()
            .find(|term| query.contains(term.as_str()))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl Default for AllowList {
    fn default() -> Self {
        Self::new(DEFAULT_HEALTH_KEYWORDS)
    }
}

/// Outcome of admission.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// An allow-listed term matched; the classifier was not called.
    Keyword(String),
    /// The classifier answered "yes".
    Classified,
    /// The classifier said anything else, or could not be reached.
    Rejected,
}

impl Verdict {
    pub fn is_allowed(&self) -> bool {
        !matches!(self, Verdict::Rejected)
    }
}

pub fn classifier_prompt(query: &str) -> String {
    format!(
        "Classify if this query is strictly about health/wellness and safe. \
         Answer only 'yes' or 'no'.\nQuery: {query}"
    )
}

pub struct AdmissionFilter {
    allow_list: AllowList,
    generator: Arc<dyn TextGenerator>,
    model: String,
}

impl AdmissionFilter {
    pub fn new(allow_list: AllowList, generator: Arc<dyn TextGenerator>, model: String) -> Self {
        Self {
            allow_list,
            generator,
            model,
        }
    }

    /// Static check only. `Some(term)` admits without a remote call.
    pub fn keyword_match(&self, query: &str) -> Option<&str> {
        self.allow_list.matches(query)
    }

    /// Full admission: keyword check, then the classifier as a fallback.
    pub async fn check(&self, query: &str) -> Verdict {
        if let Some(term) = self.keyword_match(query) {
            debug!(term, "admitted by keyword");
            return Verdict::Keyword(term.to_string());
        }

        println!("Running AI validation...");
        self.classify(query).await
    }

    async fn classify(&self, query: &str) -> Verdict {
        let request = CompletionRequest {
            model: self.model.clone(),
            prompt: classifier_prompt(query),
            max_tokens: CLASSIFIER_MAX_TOKENS,
            temperature: CLASSIFIER_TEMPERATURE,
        };

        match self.generator.complete(&request).await {
            Ok(completion) => {
                let answer = completion.text.trim().to_lowercase();
                info!(%answer, "classifier answered");
                if answer == "yes" {
                    Verdict::Classified
                } else {
                    Verdict::Rejected
                }
            }
            Err(e) => {
                debug!(error = %e, "classifier call failed, rejecting query");
                eprintln!("[Validation error: {e}]");
                Verdict::Rejected
            }
        }
    }
}
