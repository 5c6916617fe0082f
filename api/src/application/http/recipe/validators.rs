use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SuggestRecipesRequest {
    #[schema(example = json!(["tomatoes", "basil", "olive oil"]))]
    #[validate(length(min = 1, message = "Invalid ingredients provided"))]
    pub ingredients: Vec<String>,
}
