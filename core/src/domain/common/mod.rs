use std::{path::PathBuf, time::Duration};

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod services;

pub const DEFAULT_VOCABULARY: [&str; 8] = [
    "tomatoes",
    "onions",
    "bell peppers",
    "garlic",
    "olive oil",
    "pasta",
    "cheese",
    "basil",
];

#[derive(Clone, Debug)]
pub struct RecipeFinderConfig {
    pub extractor: ExtractorConfig,
    pub catalog: CatalogConfig,
    pub session: SessionConfig,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExtractorBackend {
    Random,
    Gemini,
}

#[derive(Clone, Debug)]
pub struct ExtractorConfig {
    pub backend: ExtractorBackend,
    pub vocabulary: Vec<String>,
    /// Artificial delay applied by the random extractor before answering.
    pub simulated_latency: Duration,
    pub timeout: Duration,
    pub llm: Option<LLMConfig>,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
}

#[derive(Clone, Debug, Default)]
pub struct CatalogConfig {
    /// JSON file with recipe templates. The built-in catalog is used when absent.
    pub path: Option<PathBuf>,
}

#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub max_sessions: usize,
    pub ttl: Duration,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            backend: ExtractorBackend::Random,
            vocabulary: DEFAULT_VOCABULARY.iter().map(|s| s.to_string()).collect(),
            simulated_latency: Duration::from_millis(2000),
            timeout: Duration::from_secs(10),
            llm: None,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_sessions: 1000,
            ttl: Duration::from_secs(3600),
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}
