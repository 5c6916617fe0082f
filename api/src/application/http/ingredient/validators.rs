use axum::extract::Multipart;
use recipe_finder_core::domain::ingredient::value_objects::{ImageSource, MAX_IMAGE_SIZE};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::api_error::ApiError;

/// Request body limit for image routes. A data URI is about a third larger
/// than the bytes it encodes.
pub const MAX_UPLOAD_BODY: usize = MAX_IMAGE_SIZE * 3 / 2;

/// Multipart form accepted by the image routes.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ImageUploadForm {
    /// Image file, or a `data:image/...;base64,...` URI sent as text.
    #[schema(value_type = String, format = Binary)]
    pub image: String,
}

/// Reads the `image` field of a multipart form. Other fields are ignored.
/// The size cap is enforced on the decoded image, not on the raw field.
pub async fn read_image(multipart: &mut Multipart) -> Result<ImageSource, ApiError> {
    let mut image_data: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

        image_data = Some(data.to_vec());
    }

    let image_data =
        image_data.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;

    Ok(ImageSource::from_upload(image_data))
}
