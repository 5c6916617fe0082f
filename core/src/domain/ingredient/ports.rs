use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::{
        entities::{ExtractedIngredients, IngredientName},
        value_objects::{AnalyzeImageInput, DecodedImage},
    },
};

/// Turns an image into the ingredient names visible in it.
pub trait IngredientExtractor: Send + Sync {
    fn extract(
        &self,
        image: &DecodedImage,
    ) -> impl Future<Output = Result<Vec<IngredientName>, CoreError>> + Send;
}

/// LLM Client trait for calling vision models
pub trait LLMClient: Send + Sync {
    fn generate_with_image(
        &self,
        prompt: String,
        image: DecodedImage,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

pub trait IngredientService: Send + Sync {
    fn analyze_image(
        &self,
        input: AnalyzeImageInput,
    ) -> impl Future<Output = Result<ExtractedIngredients, CoreError>> + Send;
}
