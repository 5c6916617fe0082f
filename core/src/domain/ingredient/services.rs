use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    ingredient::{
        entities::ExtractedIngredients,
        ports::{IngredientExtractor, IngredientService},
        value_objects::AnalyzeImageInput,
    },
    recipe::ports::RecipeCatalogRepository,
    recipe_detail::ports::PresentationEnricher,
    session::ports::SessionRepository,
};

impl<E, C, S, P> IngredientService for Service<E, C, S, P>
where
    E: IngredientExtractor,
    C: RecipeCatalogRepository,
    S: SessionRepository,
    P: PresentationEnricher,
{
    async fn analyze_image(
        &self,
        input: AnalyzeImageInput,
    ) -> Result<ExtractedIngredients, CoreError> {
        self.detect_ingredients(&input.image).await
    }
}
