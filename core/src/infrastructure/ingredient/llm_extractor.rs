use serde::Deserialize;
use serde_json::json;

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::{
        entities::{IngredientName, normalize_ingredient_names},
        ports::{IngredientExtractor, LLMClient},
        value_objects::DecodedImage,
    },
};

const INGREDIENT_PROMPT: &str = "Identify all food ingredients visible in this image. \
Use short, lowercase, plural common names such as \"tomatoes\" or \"bell peppers\". \
Do not list dishes, utensils or packaging.";

#[derive(Debug, Deserialize)]
struct IngredientResponse {
    ingredients: Vec<String>,
}

pub fn get_ingredient_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "ingredients": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            }
        },
        "required": ["ingredients"]
    })
}

/// Ingredient detection backed by a vision LLM.
#[derive(Debug, Clone)]
pub struct LlmIngredientExtractor<L: LLMClient> {
    client: L,
}

impl<L: LLMClient> LlmIngredientExtractor<L> {
    pub fn new(client: L) -> Self {
        Self { client }
    }
}

impl<L: LLMClient> IngredientExtractor for LlmIngredientExtractor<L> {
    async fn extract(&self, image: &DecodedImage) -> Result<Vec<IngredientName>, CoreError> {
        let raw_response = self
            .client
            .generate_with_image(
                INGREDIENT_PROMPT.to_string(),
                image.clone(),
                get_ingredient_schema(),
            )
            .await
            .map_err(|e| match e {
                upstream @ CoreError::ExternalServiceError(_) => upstream,
                other => CoreError::ExtractionFailed(other.to_string()),
            })?;

        let parsed: IngredientResponse = serde_json::from_str(&raw_response).map_err(|e| {
            tracing::error!("Invalid ingredient response from LLM: {}", e);
            CoreError::ExtractionFailed(format!("invalid ingredient response: {}", e))
        })?;

        Ok(normalize_ingredient_names(parsed.ingredients))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubLLMClient {
        response: Result<String, CoreError>,
    }

    impl LLMClient for StubLLMClient {
        async fn generate_with_image(
            &self,
            prompt: String,
            image: DecodedImage,
            response_schema: serde_json::Value,
        ) -> Result<String, CoreError> {
            assert!(prompt.contains("ingredients"));
            assert_eq!(image.mime_type, "image/jpeg");
            assert_eq!(response_schema["required"][0], "ingredients");
            self.response.clone()
        }
    }

    fn image() -> DecodedImage {
        DecodedImage {
            mime_type: "image/jpeg".to_string(),
            bytes: vec![0xFF, 0xD8, 0xFF],
        }
    }

    #[tokio::test]
    async fn test_extract_normalizes_llm_output() {
        let extractor = LlmIngredientExtractor::new(StubLLMClient {
            response: Ok(r#"{"ingredients": ["Tomatoes", " basil", "tomatoes", ""]}"#.to_string()),
        });

        let ingredients = extractor.extract(&image()).await.unwrap();
        assert_eq!(ingredients, vec!["tomatoes", "basil"]);
    }

    #[tokio::test]
    async fn test_extract_rejects_malformed_response() {
        let extractor = LlmIngredientExtractor::new(StubLLMClient {
            response: Ok("tomatoes, basil".to_string()),
        });

        let err = extractor.extract(&image()).await.unwrap_err();
        assert!(matches!(err, CoreError::ExtractionFailed(_)));
    }

    #[tokio::test]
    async fn test_extract_keeps_upstream_errors() {
        let extractor = LlmIngredientExtractor::new(StubLLMClient {
            response: Err(CoreError::ExternalServiceError("boom".to_string())),
        });

        let err = extractor.extract(&image()).await.unwrap_err();
        assert_eq!(err, CoreError::ExternalServiceError("boom".to_string()));
    }

    #[tokio::test]
    async fn test_extract_maps_other_client_errors() {
        let extractor = LlmIngredientExtractor::new(StubLLMClient {
            response: Err(CoreError::InternalServerError),
        });

        let err = extractor.extract(&image()).await.unwrap_err();
        assert!(matches!(err, CoreError::ExtractionFailed(_)));
    }
}
