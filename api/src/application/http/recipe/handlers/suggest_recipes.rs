use axum::extract::State;
use recipe_finder_core::domain::recipe::{
    entities::RecipeCandidate, ports::RecipeService, value_objects::SuggestRecipesInput,
};

use crate::application::http::{
    recipe::validators::SuggestRecipesRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "",
    tag = "recipe",
    summary = "Suggest recipes",
    description = "Ranks the recipe catalog against a list of ingredients. Recipes need at least two matching ingredients; the best matches come first.",
    request_body = SuggestRecipesRequest,
    responses(
        (status = 200, body = Vec<RecipeCandidate>),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse)
    ),
)]
pub async fn suggest_recipes(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SuggestRecipesRequest>,
) -> Result<Response<Vec<RecipeCandidate>>, ApiError> {
    let recipes = state
        .service
        .suggest_recipes(SuggestRecipesInput {
            ingredients: payload.ingredients,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(recipes))
}
