use axum::extract::State;
use recipe_finder_core::domain::session::{
    entities::RecipeSession, ports::SessionService, value_objects::StartSessionFromIngredientsInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
    session::validators::CreateSessionRequest,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SessionResponse {
    pub data: RecipeSession,
}

#[utoipa::path(
    post,
    path = "",
    tag = "session",
    summary = "Start a session from ingredients",
    description = "Matches the given ingredients against the catalog and keeps the ranked recipes in a new session",
    request_body = CreateSessionRequest,
    responses(
        (status = 200, body = SessionResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse)
    ),
)]
pub async fn create_session(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateSessionRequest>,
) -> Result<Response<SessionResponse>, ApiError> {
    let session = state
        .service
        .start_session_from_ingredients(StartSessionFromIngredientsInput {
            ingredients: payload.ingredients,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SessionResponse { data: session }))
}
