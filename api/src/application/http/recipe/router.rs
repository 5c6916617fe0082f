use super::handlers::{
    get_catalog::{__path_get_catalog, get_catalog},
    suggest_recipes::{__path_suggest_recipes, suggest_recipes},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(suggest_recipes, get_catalog))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/recipes", state.args.server.root_path),
            post(suggest_recipes),
        )
        .route(
            &format!("{}/recipes/catalog", state.args.server.root_path),
            get(get_catalog),
        )
}
