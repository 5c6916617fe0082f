use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    ingredient::ports::IngredientExtractor,
    recipe::{
        entities::{RecipeCandidate, RecipeTemplate},
        ports::{RecipeCatalogRepository, RecipeService},
        value_objects::SuggestRecipesInput,
    },
    recipe_detail::ports::PresentationEnricher,
    session::ports::SessionRepository,
};

impl<E, C, S, P> RecipeService for Service<E, C, S, P>
where
    E: IngredientExtractor,
    C: RecipeCatalogRepository,
    S: SessionRepository,
    P: PresentationEnricher,
{
    async fn suggest_recipes(
        &self,
        input: SuggestRecipesInput,
    ) -> Result<Vec<RecipeCandidate>, CoreError> {
        self.rank_recipes(&input.ingredients).await
    }

    async fn list_catalog(&self) -> Result<Vec<RecipeTemplate>, CoreError> {
        self.recipe_catalog.list_templates().await
    }
}
