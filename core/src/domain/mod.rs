pub mod common;
pub mod ingredient;
pub mod recipe;
pub mod recipe_detail;
pub mod session;
