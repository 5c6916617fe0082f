use axum::extract::{Path, State};
use recipe_finder_core::domain::recipe_detail::{
    entities::RecipeDetail, ports::RecipeDetailService, value_objects::GetRecipeDetailInput,
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
pub struct RecipeDetailResponse {
    pub data: RecipeDetail,
}

#[utoipa::path(
    get,
    path = "/{session_id}/recipes/{recipe_id}",
    tag = "session",
    summary = "Get recipe detail",
    description = "Expands a recipe of the session with amounts, steps, equipment, nutrition and a chef tip",
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
    responses(
        (status = 200, body = RecipeDetailResponse),
        (status = 404, body = ApiErrorResponse)
    ),
)]
pub async fn get_recipe_detail(
    Path((session_id, recipe_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
) -> Result<Response<RecipeDetailResponse>, ApiError> {
    let detail = state
        .service
        .get_recipe_detail(GetRecipeDetailInput {
            session_id,
            recipe_id,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RecipeDetailResponse { data: detail }))
}
