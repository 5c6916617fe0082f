pub mod ingredient;
pub mod llm;
pub mod recipe;
pub mod recipe_detail;
pub mod session;
