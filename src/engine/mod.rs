pub mod admission;
pub mod aggregation;
pub mod pipeline;
pub mod retrieval;

use async_trait::async_trait;

use crate::error::PipelineError;
use pipeline::Report;

/// The outermost boundary. main.rs only knows this trait.
#[async_trait]
pub trait Engine: Send + Sync {
    async fn run(&mut self, query: &str) -> Result<Report, PipelineError>;
}
