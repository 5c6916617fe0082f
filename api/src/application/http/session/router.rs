use super::handlers::{
    create_session::{__path_create_session, create_session},
    create_session_from_image::{__path_create_session_from_image, create_session_from_image},
    delete_session::{__path_delete_session, delete_session},
    favorite_recipe::{__path_favorite_recipe, favorite_recipe},
    get_recipe_detail::{__path_get_recipe_detail, get_recipe_detail},
    get_session::{__path_get_session, get_session},
};
use crate::application::http::{
    ingredient::validators::MAX_UPLOAD_BODY, server::app_state::AppState,
};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    create_session,
    create_session_from_image,
    get_session,
    delete_session,
    favorite_recipe,
    get_recipe_detail
))]
pub struct SessionApiDoc;

pub fn session_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/sessions", root_path), post(create_session))
        .route(
            &format!("{}/sessions/image", root_path),
            post(create_session_from_image).layer(DefaultBodyLimit::max(MAX_UPLOAD_BODY)),
        )
        .route(
            &format!("{}/sessions/{{session_id}}", root_path),
            get(get_session).delete(delete_session),
        )
        .route(
            &format!(
                "{}/sessions/{{session_id}}/recipes/{{recipe_id}}",
                root_path
            ),
            get(get_recipe_detail),
        )
        .route(
            &format!(
                "{}/sessions/{{session_id}}/recipes/{{recipe_id}}/favorite",
                root_path
            ),
            put(favorite_recipe),
        )
}
