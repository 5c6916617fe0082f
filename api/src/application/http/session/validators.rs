use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateSessionRequest {
    #[schema(example = json!(["eggs", "cheese", "onions"]))]
    #[validate(length(min = 1, message = "Invalid ingredients provided"))]
    pub ingredients: Vec<String>,
}
