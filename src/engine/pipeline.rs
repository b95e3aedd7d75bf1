use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

use super::Engine;
use super::admission::{AdmissionFilter, Verdict};
use super::aggregation::Aggregator;
use super::retrieval::{Retriever, SearchResult, SummaryPair};
use crate::config::Settings;
use crate::error::PipelineError;
use crate::generator::{TextGenerator, TokenUsage};
use crate::generator::metered::MeteredGenerator;
use crate::report;
use crate::search::SearchProvider;

/// Where a run currently is. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Admitting,
    Retrieving,
    Aggregating,
    Done,
    Aborted,
}

/// Everything a successful run produced.
#[derive(Debug, Clone)]
pub struct Report {
    pub query: String,
    pub verdict: Verdict,
    pub results: Vec<SearchResult>,
    pub recommendation: String,
}

/// Admission, then retrieval, then aggregation. No retries, no loops.
pub struct QueryPipeline {
    admission: AdmissionFilter,
    retriever: Retriever,
    aggregator: Aggregator,
    generator: Arc<MeteredGenerator>,
    stage: Stage,
}

impl QueryPipeline {
    pub fn new(
        settings: &Settings,
        search: Arc<dyn SearchProvider>,
        generator: Arc<dyn TextGenerator>,
    ) -> Self {
        let generator = Arc::new(MeteredGenerator::new(generator));
        Self {
            admission: AdmissionFilter::new(
                settings.allow_list.clone(),
                generator.clone(),
                settings.model.clone(),
            ),
            retriever: Retriever::new(search, settings.filters.clone(), settings.max_results),
            aggregator: Aggregator::new(generator.clone(), settings.model.clone()),
            generator,
            stage: Stage::Idle,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Tokens spent on generation calls so far.
    pub fn session_usage(&self) -> TokenUsage {
        self.generator.usage()
    }

    fn advance(&mut self, next: Stage) {
        debug!(from = ?self.stage, to = ?next, "stage transition");
        self.stage = next;
    }
}

#[async_trait]
impl Engine for QueryPipeline {
    async fn run(&mut self, query: &str) -> Result<Report, PipelineError> {
        self.stage = Stage::Idle;

        let query = query.trim();
        if query.is_empty() {
            return Err(PipelineError::EmptyQuery);
        }

        self.advance(Stage::Admitting);
        let verdict = self.admission.check(query).await;
        if !verdict.is_allowed() {
            self.advance(Stage::Aborted);
            info!("query rejected");
            return Err(PipelineError::Rejected);
        }

        self.advance(Stage::Retrieving);
        println!("Searching for: {}\n", query);
        let results = self
            .retriever
            .retrieve(query)
            .await
            .map_err(PipelineError::Retrieval)?;

        println!("{}", report::render_results(&results));

        self.advance(Stage::Aggregating);
        let pairs: Vec<SummaryPair> = results.iter().map(SearchResult::summary_pair).collect();
        let recommendation = self.aggregator.recommend(&pairs).await;

        self.advance(Stage::Done);
        let usage = self.session_usage();
        info!(
            input_tokens = usage.input_tokens,
            output_tokens = usage.output_tokens,
            "run complete"
        );

        Ok(Report {
            query: query.to_string(),
            verdict,
            results,
            recommendation,
        })
    }
}
