use axum::extract::{Multipart, State};
use recipe_finder_core::domain::ingredient::{
    entities::ExtractedIngredients, ports::IngredientService, value_objects::AnalyzeImageInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    ingredient::validators::{ImageUploadForm, read_image},
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeImageResponse {
    pub data: ExtractedIngredients,
}

#[utoipa::path(
    post,
    path = "/analyze",
    tag = "ingredient",
    summary = "Detect ingredients in a photo",
    description = "Runs the configured ingredient extractor on an uploaded image",
    request_body(content = ImageUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = AnalyzeImageResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 422, body = ApiErrorResponse),
        (status = 502, body = ApiErrorResponse),
        (status = 504, body = ApiErrorResponse)
    ),
)]
pub async fn analyze_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<AnalyzeImageResponse>, ApiError> {
    let image = read_image(&mut multipart).await?;

    let extracted = state
        .service
        .analyze_image(AnalyzeImageInput { image })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeImageResponse { data: extracted }))
}
