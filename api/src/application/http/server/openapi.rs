use crate::application::http::{
    health::HealthApiDoc, ingredient::router::IngredientApiDoc, recipe::router::RecipeApiDoc,
    session::router::SessionApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Recipe Finder API"
    ),
    nest(
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/ingredients", api = IngredientApiDoc),
        (path = "/sessions", api = SessionApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
