use super::{
    handlers::analyze_image::{__path_analyze_image, analyze_image},
    validators::MAX_UPLOAD_BODY,
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(analyze_image))]
pub struct IngredientApiDoc;

pub fn ingredient_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/ingredients/analyze", state.args.server.root_path),
            post(analyze_image),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BODY))
}
