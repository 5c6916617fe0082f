use axum::extract::{Path, State};
use recipe_finder_core::domain::session::{
    entities::SessionRecipe, ports::SessionService, value_objects::FavoriteRecipeInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FavoriteRecipeResponse {
    pub data: SessionRecipe,
}

#[utoipa::path(
    put,
    path = "/{session_id}/recipes/{recipe_id}/favorite",
    tag = "session",
    summary = "Add a recipe to favorites",
    description = "Marks a recipe of the session as favorite. Marking it twice is a no-op.",
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
    responses(
        (status = 200, body = FavoriteRecipeResponse),
        (status = 404, body = ApiErrorResponse)
    ),
)]
pub async fn favorite_recipe(
    Path((session_id, recipe_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
) -> Result<Response<FavoriteRecipeResponse>, ApiError> {
    let entry = state
        .service
        .favorite_recipe(FavoriteRecipeInput {
            session_id,
            recipe_id,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(FavoriteRecipeResponse { data: entry }))
}
