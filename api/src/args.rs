use std::{net::IpAddr, path::PathBuf, time::Duration};

use clap::{Parser, ValueEnum};
use recipe_finder_core::domain::common::{
    CatalogConfig, DEFAULT_VOCABULARY, ExtractorBackend, ExtractorConfig, LLMConfig,
    RecipeFinderConfig, SessionConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "recipe-finder-api", version, about = "Recipe Finder API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub extractor: ExtractorArgs,

    #[command(flatten)]
    pub catalog: CatalogArgs,

    #[command(flatten)]
    pub session: SessionArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "/api")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(
        long = "metrics-enabled",
        env = "METRICS_ENABLED",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    pub metrics_enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExtractorKind {
    Random,
    Gemini,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ExtractorArgs {
    #[arg(
        long = "extractor",
        env = "EXTRACTOR",
        value_enum,
        default_value_t = ExtractorKind::Random
    )]
    pub kind: ExtractorKind,

    /// Ingredients the random extractor picks from.
    #[arg(
        long = "extractor-vocabulary",
        env = "EXTRACTOR_VOCABULARY",
        value_delimiter = ',',
        default_values_t = DEFAULT_VOCABULARY.map(String::from).to_vec()
    )]
    pub vocabulary: Vec<String>,

    #[arg(
        long = "extractor-latency-ms",
        env = "EXTRACTOR_LATENCY_MS",
        default_value_t = 2000
    )]
    pub latency_ms: u64,

    #[arg(
        long = "extractor-timeout-ms",
        env = "EXTRACTOR_TIMEOUT_MS",
        default_value_t = 10_000
    )]
    pub timeout_ms: u64,

    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY")]
    pub gemini_api_key: Option<String>,

    #[arg(
        long = "gemini-model",
        env = "GEMINI_MODEL",
        default_value = "gemini-2.0-flash"
    )]
    pub gemini_model: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct CatalogArgs {
    /// JSON file with recipe templates; the built-in catalog is used otherwise.
    #[arg(long = "catalog-path", env = "CATALOG_PATH")]
    pub catalog_path: Option<PathBuf>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct SessionArgs {
    #[arg(long = "max-sessions", env = "MAX_SESSIONS", default_value_t = 1000)]
    pub max_sessions: usize,

    #[arg(
        long = "session-ttl-secs",
        env = "SESSION_TTL_SECS",
        default_value_t = 3600
    )]
    pub ttl_secs: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "RUST_LOG", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for RecipeFinderConfig {
    fn from(args: Args) -> Self {
        let backend = match args.extractor.kind {
            ExtractorKind::Random => ExtractorBackend::Random,
            ExtractorKind::Gemini => ExtractorBackend::Gemini,
        };

        let llm = args.extractor.gemini_api_key.map(|gemini_api_key| LLMConfig {
            gemini_api_key,
            gemini_model: args.extractor.gemini_model,
        });

        RecipeFinderConfig {
            extractor: ExtractorConfig {
                backend,
                vocabulary: args.extractor.vocabulary,
                simulated_latency: Duration::from_millis(args.extractor.latency_ms),
                timeout: Duration::from_millis(args.extractor.timeout_ms),
                llm,
            },
            catalog: CatalogConfig {
                path: args.catalog.catalog_path,
            },
            session: SessionConfig {
                max_sessions: args.session.max_sessions,
                ttl: Duration::from_secs(args.session.ttl_secs),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["recipe-finder-api"]);
        assert_eq!(args.server.port, 3333);
        assert_eq!(args.server.root_path, "/api");
        assert_eq!(args.extractor.vocabulary.len(), 8);

        let config = RecipeFinderConfig::from(args);
        assert_eq!(config.extractor.backend, ExtractorBackend::Random);
        assert_eq!(config.extractor.simulated_latency, Duration::from_millis(2000));
        assert!(config.catalog.path.is_none());
    }

    #[test]
    fn test_gemini_flags() {
        let args = Args::parse_from([
            "recipe-finder-api",
            "--extractor",
            "gemini",
            "--gemini-api-key",
            "secret",
            "--extractor-vocabulary",
            "eggs,cheese",
        ]);

        let config = RecipeFinderConfig::from(args);
        assert_eq!(config.extractor.backend, ExtractorBackend::Gemini);
        assert_eq!(config.extractor.vocabulary, vec!["eggs", "cheese"]);
        assert_eq!(config.extractor.llm.unwrap().gemini_api_key, "secret");
    }
}
