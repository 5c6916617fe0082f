use axum::extract::{Path, State};
use recipe_finder_core::domain::session::{ports::SessionService, value_objects::GetSessionInput};
use uuid::Uuid;

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
    session::handlers::create_session::SessionResponse,
};

#[utoipa::path(
    get,
    path = "/{session_id}",
    tag = "session",
    summary = "Get a session",
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
    ),
    responses(
        (status = 200, body = SessionResponse),
        (status = 404, body = ApiErrorResponse)
    ),
)]
pub async fn get_session(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<SessionResponse>, ApiError> {
    let session = state
        .service
        .get_session(GetSessionInput { session_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SessionResponse { data: session }))
}
