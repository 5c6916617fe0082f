use axum::extract::{Path, State};
use recipe_finder_core::domain::session::{
    ports::SessionService, value_objects::DeleteSessionInput,
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
pub struct DeleteSessionResponse {
    pub data: DeleteSessionMessage,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DeleteSessionMessage {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{session_id}",
    tag = "session",
    summary = "Delete a session",
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
    ),
    responses(
        (status = 200, body = DeleteSessionResponse),
        (status = 404, body = ApiErrorResponse)
    ),
)]
pub async fn delete_session(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<DeleteSessionResponse>, ApiError> {
    state
        .service
        .delete_session(DeleteSessionInput { session_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteSessionResponse {
        data: DeleteSessionMessage {
            message: format!("Session {} deleted", session_id),
        },
    }))
}
