use axum::extract::{Multipart, State};
use recipe_finder_core::domain::session::{
    ports::SessionService, value_objects::StartSessionFromImageInput,
};

use crate::application::http::{
    ingredient::validators::{ImageUploadForm, read_image},
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
    post,
    path = "/image",
    tag = "session",
    summary = "Start a session from a photo",
    description = "Detects the ingredients in the photo, ranks the catalog against them and stores the result",
    request_body(content = ImageUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = SessionResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 422, body = ApiErrorResponse),
        (status = 502, body = ApiErrorResponse),
        (status = 504, body = ApiErrorResponse)
    ),
)]
pub async fn create_session_from_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<SessionResponse>, ApiError> {
    let image = read_image(&mut multipart).await?;

    let session = state
        .service
        .start_session_from_image(StartSessionFromImageInput { image })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SessionResponse { data: session }))
}
