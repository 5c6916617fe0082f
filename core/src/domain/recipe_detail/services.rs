use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    ingredient::ports::IngredientExtractor,
    recipe::ports::RecipeCatalogRepository,
    recipe_detail::{
        entities::{IngredientLine, RecipeDetail},
        ports::{PresentationEnricher, RecipeDetailService},
        value_objects::GetRecipeDetailInput,
    },
    session::ports::SessionRepository,
};

impl<E, C, S, P> RecipeDetailService for Service<E, C, S, P>
where
    E: IngredientExtractor,
    C: RecipeCatalogRepository,
    S: SessionRepository,
    P: PresentationEnricher,
{
    async fn get_recipe_detail(
        &self,
        input: GetRecipeDetailInput,
    ) -> Result<RecipeDetail, CoreError> {
        let session = self
            .session_repository
            .get_by_id(input.session_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let candidate = &session
            .find_recipe(input.recipe_id)
            .ok_or(CoreError::NotFound)?
            .recipe;

        let enricher = &self.presentation_enricher;

        // Matched ingredients first, then the ones still to buy
        let ingredients = candidate
            .matched_ingredients
            .iter()
            .map(|name| (name, true))
            .chain(candidate.missing_ingredients.iter().map(|name| (name, false)))
            .map(|(name, is_matched)| IngredientLine {
                name: name.clone(),
                amount: enricher.ingredient_amount(name),
                is_matched,
            })
            .collect();

        Ok(RecipeDetail::from_candidate(
            candidate,
            ingredients,
            enricher.equipment(),
            enricher.instructions(candidate),
            enricher.nutrition(),
            enricher.chef_tip(&candidate.title),
        ))
    }
}
