use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    ingredient::ports::IngredientExtractor,
    recipe::ports::RecipeCatalogRepository,
    recipe_detail::ports::PresentationEnricher,
    session::{
        entities::{RecipeSession, SessionRecipe},
        ports::{SessionRepository, SessionService},
        value_objects::{
            DeleteSessionInput, FavoriteRecipeInput, GetSessionInput, StartSessionFromImageInput,
            StartSessionFromIngredientsInput,
        },
    },
};

impl<E, C, S, P> SessionService for Service<E, C, S, P>
where
    E: IngredientExtractor,
    C: RecipeCatalogRepository,
    S: SessionRepository,
    P: PresentationEnricher,
{
    async fn start_session_from_image(
        &self,
        input: StartSessionFromImageInput,
    ) -> Result<RecipeSession, CoreError> {
        // 1. Detect ingredients
        let extracted = self.detect_ingredients(&input.image).await?;

        // 2. Rank recipes
        let recipes = self.rank_recipes(&extracted.ingredients).await?;

        // 3. Store only once the whole pipeline succeeded
        let session = RecipeSession::new(
            extracted.ingredients,
            recipes,
            Some(extracted.image_sha256),
        );
        let session = self.session_repository.create_session(session).await?;

        tracing::info!(
            session_id = %session.id,
            recipes = session.recipes.len(),
            "started recipe session from image"
        );

        Ok(session)
    }

    async fn start_session_from_ingredients(
        &self,
        input: StartSessionFromIngredientsInput,
    ) -> Result<RecipeSession, CoreError> {
        let recipes = self.rank_recipes(&input.ingredients).await?;

        let session = RecipeSession::new(input.ingredients, recipes, None);
        let session = self.session_repository.create_session(session).await?;

        tracing::info!(
            session_id = %session.id,
            recipes = session.recipes.len(),
            "started recipe session from ingredients"
        );

        Ok(session)
    }

    async fn get_session(&self, input: GetSessionInput) -> Result<RecipeSession, CoreError> {
        self.session_repository
            .get_by_id(input.session_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn favorite_recipe(
        &self,
        input: FavoriteRecipeInput,
    ) -> Result<SessionRecipe, CoreError> {
        self.session_repository
            .update_session_with(input.session_id, move |session| {
                session.mark_favorite(input.recipe_id)
            })
            .await
    }

    async fn delete_session(&self, input: DeleteSessionInput) -> Result<(), CoreError> {
        self.session_repository
            .delete_session(input.session_id)
            .await
    }
}
