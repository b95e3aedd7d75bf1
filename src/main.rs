use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use salve::config::{Settings, load_allow_list};
use salve::consts::{DEFAULT_MAX_RESULTS, DEFAULT_MODEL};
use salve::engine::Engine;
use salve::engine::pipeline::QueryPipeline;
use salve::error::PipelineError;
use salve::generator::openai::OpenAiGenerator;
use salve::report;
use salve::search::exa::ExaSearch;

const USAGE: &str = "Usage: salve <health-related query>";

#[derive(Parser)]
#[command(
    name = "salve",
    version,
    about = "Answers health questions from research summaries."
)]
struct Cli {
    /// The question; all words are joined with spaces
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    query: Vec<String>,

    /// Chat-completions model used for classification and summaries
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Maximum search results to summarize
    #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_RESULTS)]
    max_results: usize,

    /// File of allow-listed terms (one per line) replacing the built-in list
    #[arg(short, long)]
    keywords: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => {
            // --help / --version
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            println!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(cli.verbose);

    let query = cli.query.join(" ");
    match run(&cli, &query).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<PipelineError>() {
                Some(PipelineError::Rejected) => println!("Error: {e}"),
                Some(PipelineError::EmptyQuery) => println!("{USAGE}"),
                _ => println!("Unexpected error: {e}"),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli, query: &str) -> anyhow::Result<()> {
    let mut settings = Settings::from_env();
    settings.model = cli.model.clone();
    settings.max_results = cli.max_results;
    if let Some(path) = &cli.keywords {
        settings.allow_list = load_allow_list(path)?;
    }

    let search = Arc::new(ExaSearch::new(
        settings.search.base_url.clone(),
        settings.search.api_key.clone(),
    ));
    let generator = Arc::new(OpenAiGenerator::new(
        settings.generation.base_url.clone(),
        settings.generation.api_key.clone(),
    ));

    let mut engine = QueryPipeline::new(&settings, search, generator);
    let report = engine.run(query).await?;
    println!("{}", report::render_recommendation(&report.recommendation));
    Ok(())
}
