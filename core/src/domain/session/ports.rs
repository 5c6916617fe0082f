use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    session::{
        entities::{RecipeSession, SessionRecipe},
        value_objects::{
            DeleteSessionInput, FavoriteRecipeInput, GetSessionInput, StartSessionFromImageInput,
            StartSessionFromIngredientsInput,
        },
    },
};

/// Repository trait for result sessions
pub trait SessionRepository: Send + Sync {
    fn create_session(
        &self,
        session: RecipeSession,
    ) -> impl Future<Output = Result<RecipeSession, CoreError>> + Send;

    fn get_by_id(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<Option<RecipeSession>, CoreError>> + Send;

    /// Applies `update` to a live session while holding it exclusively, so
    /// concurrent updates of the same session cannot overwrite each other.
    fn update_session_with<T, F>(
        &self,
        session_id: Uuid,
        update: F,
    ) -> impl Future<Output = Result<T, CoreError>> + Send
    where
        T: Send,
        F: FnOnce(&mut RecipeSession) -> Result<T, CoreError> + Send;

    fn delete_session(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub trait SessionService: Send + Sync {
    fn start_session_from_image(
        &self,
        input: StartSessionFromImageInput,
    ) -> impl Future<Output = Result<RecipeSession, CoreError>> + Send;

    fn start_session_from_ingredients(
        &self,
        input: StartSessionFromIngredientsInput,
    ) -> impl Future<Output = Result<RecipeSession, CoreError>> + Send;

    fn get_session(
        &self,
        input: GetSessionInput,
    ) -> impl Future<Output = Result<RecipeSession, CoreError>> + Send;

    fn favorite_recipe(
        &self,
        input: FavoriteRecipeInput,
    ) -> impl Future<Output = Result<SessionRecipe, CoreError>> + Send;

    fn delete_session(
        &self,
        input: DeleteSessionInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
