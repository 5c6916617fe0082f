use crate::{
    domain::{
        common::{ExtractorBackend, ExtractorConfig, entities::app_errors::CoreError},
        ingredient::{entities::IngredientName, ports::IngredientExtractor, value_objects::DecodedImage},
    },
    infrastructure::{
        ingredient::{LlmIngredientExtractor, RandomIngredientExtractor},
        llm::GeminiLLMClient,
    },
};

/// Extractor chosen at startup from configuration.
#[derive(Debug, Clone)]
pub enum ConfiguredExtractor {
    Random(RandomIngredientExtractor),
    Gemini(LlmIngredientExtractor<GeminiLLMClient>),
}

impl ConfiguredExtractor {
    pub fn from_config(config: &ExtractorConfig) -> Result<Self, CoreError> {
        match config.backend {
            ExtractorBackend::Random => Ok(ConfiguredExtractor::Random(
                RandomIngredientExtractor::new(config.vocabulary.clone(), config.simulated_latency)?,
            )),
            ExtractorBackend::Gemini => {
                let llm = config.llm.as_ref().ok_or_else(|| {
                    CoreError::Configuration(
                        "the gemini extractor requires an API key".to_string(),
                    )
                })?;

                if llm.gemini_api_key.trim().is_empty() {
                    return Err(CoreError::Configuration(
                        "the gemini extractor requires an API key".to_string(),
                    ));
                }

                Ok(ConfiguredExtractor::Gemini(LlmIngredientExtractor::new(
                    GeminiLLMClient::new(llm.gemini_api_key.clone(), llm.gemini_model.clone()),
                )))
            }
        }
    }
}

impl IngredientExtractor for ConfiguredExtractor {
    async fn extract(&self, image: &DecodedImage) -> Result<Vec<IngredientName>, CoreError> {
        match self {
            ConfiguredExtractor::Random(extractor) => extractor.extract(image).await,
            ConfiguredExtractor::Gemini(extractor) => extractor.extract(image).await,
        }
    }
}
