use std::time::Duration;

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::{
        entities::{ExtractedIngredients, IngredientName},
        ports::IngredientExtractor,
        value_objects::ImageSource,
    },
    recipe::{
        entities::RecipeCandidate, matcher::match_recipes, ports::RecipeCatalogRepository,
        value_objects::ensure_valid_ingredients,
    },
    recipe_detail::ports::PresentationEnricher,
    session::ports::SessionRepository,
};

#[derive(Clone)]
pub struct Service<E, C, S, P>
where
    E: IngredientExtractor,
    C: RecipeCatalogRepository,
    S: SessionRepository,
    P: PresentationEnricher,
{
    pub(crate) ingredient_extractor: E,
    pub(crate) recipe_catalog: C,
    pub(crate) session_repository: S,
    pub(crate) presentation_enricher: P,
    pub(crate) extraction_timeout: Duration,
}

impl<E, C, S, P> Service<E, C, S, P>
where
    E: IngredientExtractor,
    C: RecipeCatalogRepository,
    S: SessionRepository,
    P: PresentationEnricher,
{
    pub fn new(
        ingredient_extractor: E,
        recipe_catalog: C,
        session_repository: S,
        presentation_enricher: P,
        extraction_timeout: Duration,
    ) -> Self {
        Self {
            ingredient_extractor,
            recipe_catalog,
            session_repository,
            presentation_enricher,
            extraction_timeout,
        }
    }

    /// Decodes the image and runs the extractor under the configured timeout.
    /// An empty detection is reported as a failure.
    pub(crate) async fn detect_ingredients(
        &self,
        image: &ImageSource,
    ) -> Result<ExtractedIngredients, CoreError> {
        let decoded = image.decode().inspect_err(|e| {
            tracing::warn!("Rejected image before extraction: {}", e);
        })?;
        let image_sha256 = decoded.sha256();

        let ingredients = tokio::time::timeout(
            self.extraction_timeout,
            self.ingredient_extractor.extract(&decoded),
        )
        .await
        .map_err(|_| {
            tracing::error!(
                image_sha256 = %image_sha256,
                "Ingredient extraction timed out after {:?}",
                self.extraction_timeout
            );
            CoreError::ExtractionTimeout(self.extraction_timeout.as_millis())
        })?
        .inspect_err(|e| {
            tracing::error!(image_sha256 = %image_sha256, "Ingredient extraction failed: {}", e);
        })?;

        if ingredients.is_empty() {
            tracing::warn!(image_sha256 = %image_sha256, "No ingredients detected");
            return Err(CoreError::ExtractionFailed(
                "no ingredients detected in the image".to_string(),
            ));
        }

        tracing::info!(
            image_sha256 = %image_sha256,
            mime_type = %decoded.mime_type,
            count = ingredients.len(),
            "detected ingredients"
        );

        Ok(ExtractedIngredients {
            ingredients,
            image_sha256,
        })
    }

    /// Validates the ingredient list and ranks the catalog against it.
    pub(crate) async fn rank_recipes(
        &self,
        ingredients: &[IngredientName],
    ) -> Result<Vec<RecipeCandidate>, CoreError> {
        ensure_valid_ingredients(ingredients)?;

        let catalog = self.recipe_catalog.list_templates().await.map_err(|e| {
            tracing::error!("Failed to load recipe catalog: {}", e);
            CoreError::InternalMatching(e.to_string())
        })?;

        let candidates = match_recipes(ingredients, &catalog);

        tracing::debug!(
            ingredients = ingredients.len(),
            templates = catalog.len(),
            candidates = candidates.len(),
            "matched recipes"
        );

        Ok(candidates)
    }
}
