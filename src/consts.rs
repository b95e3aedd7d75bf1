//! Project-wide constants.

use std::time::Duration;

/// Default chat-completions model when none is specified.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// How many search results are kept for summarization.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Output budget for the final recommendation.
pub const SUMMARY_MAX_TOKENS: u32 = 350;
pub const SUMMARY_TEMPERATURE: f32 = 0.5;

/// The classifier answers with a single deterministic token.
pub const CLASSIFIER_MAX_TOKENS: u32 = 1;
pub const CLASSIFIER_TEMPERATURE: f32 = 0.0;

/// Timeout for the generic content fetch helper. Provider calls have none.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

pub const EXA_API_KEY_VAR: &str = "EXA_API_KEY";
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const EXA_BASE_URL_VAR: &str = "EXA_BASE_URL";
pub const OPENAI_BASE_URL_VAR: &str = "OPENAI_BASE_URL";

pub const DEFAULT_EXA_BASE_URL: &str = "https://api.exa.ai";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Characters of each summary shown in the search results listing.
pub const SUMMARY_PREVIEW_CHARS: usize = 150;

/// Terms that admit a query without asking the classifier.
pub const DEFAULT_HEALTH_KEYWORDS: &[&str] = &[
    "cholesterol",
    "testosterone",
    "diet",
    "blood pressure",
    "diabetes",
    "nutrition",
    "heart",
    "cancer",
    "vitamin",
    "exercise",
    "obesity",
    "weight",
    "food",
    "fat",
    "protein",
    "carbohydrate",
    "disease",
    "health",
    "wellness",
    "fitness",
    "calorie",
    "sugar",
    "insulin",
    "metabolism",
    "immune",
    "allergy",
    "asthma",
    "arthritis",
    "depression",
    "anxiety",
    "mental health",
    "sleep",
    "hydration",
    "supplement",
];

/// Truncate `text` to at most `max` characters without splitting a char.
pub fn preview(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
