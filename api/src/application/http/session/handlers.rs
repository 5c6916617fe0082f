pub mod create_session;
pub mod create_session_from_image;
pub mod delete_session;
pub mod favorite_recipe;
pub mod get_recipe_detail;
pub mod get_session;
