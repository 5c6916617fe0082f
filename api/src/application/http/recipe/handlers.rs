pub mod get_catalog;
pub mod suggest_recipes;
