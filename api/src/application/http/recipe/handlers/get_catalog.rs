use axum::extract::State;
use recipe_finder_core::domain::recipe::{entities::RecipeTemplate, ports::RecipeService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CatalogResponse {
    pub data: Vec<RecipeTemplate>,
}

#[utoipa::path(
    get,
    path = "/catalog",
    tag = "recipe",
    summary = "List recipe catalog",
    description = "Returns every recipe template the matcher ranks against",
    responses(
        (status = 200, body = CatalogResponse),
        (status = 500, body = ApiErrorResponse)
    ),
)]
pub async fn get_catalog(
    State(state): State<AppState>,
) -> Result<Response<CatalogResponse>, ApiError> {
    let templates = state
        .service
        .list_catalog()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(CatalogResponse { data: templates }))
}
