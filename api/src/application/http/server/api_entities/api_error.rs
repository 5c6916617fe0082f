use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use recipe_finder_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    UnprocessableEntity(String),

    #[error("{0}")]
    BadGateway(String),

    #[error("{0}")]
    GatewayTimeout(String),

    #[error("{0}")]
    InternalServerError(String),
}

/// Body of every error response.
#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::GatewayTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::InvalidInput(message) => ApiError::BadRequest(message),
            CoreError::ExtractionFailed(_) => ApiError::UnprocessableEntity(error.to_string()),
            CoreError::ExtractionTimeout(_) => ApiError::GatewayTimeout(error.to_string()),
            CoreError::InternalMatching(ref cause) => {
                tracing::error!("Error generating recipes: {}", cause);
                ApiError::InternalServerError("Failed to generate recipes".to_string())
            }
            CoreError::NotFound => ApiError::NotFound("Not found".to_string()),
            CoreError::ExternalServiceError(ref cause) => {
                tracing::error!("Upstream service error: {}", cause);
                ApiError::BadGateway("Upstream service error".to_string())
            }
            CoreError::Configuration(_) | CoreError::InternalServerError => {
                tracing::error!("Internal error: {}", error);
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "{}", self);
        } else {
            tracing::debug!(status = status.as_u16(), "{}", self);
        }

        (
            status,
            Json(ApiErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// JSON body extractor that also runs `validator` rules.
/// Both decoding and validation failures become `400 {"error": ...}`.
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| ApiError::BadRequest(validation_message(&errors)))?;

        Ok(ValidateJson(value))
    }
}

fn validation_message(errors: &ValidationErrors) -> String {
    let messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| match &error.message {
                Some(message) => message.to_string(),
                None => format!("{}: {}", field, error.code),
            })
        })
        .collect();

    if messages.is_empty() {
        errors.to_string()
    } else {
        messages.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_status() {
        let cases = [
            (CoreError::InvalidInput("x".to_string()), StatusCode::BAD_REQUEST),
            (
                CoreError::ExtractionFailed("x".to_string()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (CoreError::ExtractionTimeout(10), StatusCode::GATEWAY_TIMEOUT),
            (
                CoreError::InternalMatching("x".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (CoreError::NotFound, StatusCode::NOT_FOUND),
            (
                CoreError::ExternalServiceError("x".to_string()),
                StatusCode::BAD_GATEWAY,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(ApiError::from(error).status(), status);
        }
    }

    #[test]
    fn test_upstream_error_hides_cause() {
        let error = ApiError::from(CoreError::ExternalServiceError(
            "LLM API error: request to https://llm.example/models?key=SECRET failed".to_string(),
        ));

        assert_eq!(error.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(error.to_string(), "Upstream service error");
    }

    #[test]
    fn test_internal_matching_hides_cause() {
        let error = ApiError::from(CoreError::InternalMatching("catalog offline".to_string()));
        assert_eq!(error.to_string(), "Failed to generate recipes");
    }
}
