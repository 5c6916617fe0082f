use crate::domain::{common::entities::app_errors::CoreError, ingredient::entities::IngredientName};

pub const INVALID_INGREDIENTS_MESSAGE: &str = "Invalid ingredients provided";

#[derive(Debug, Clone)]
pub struct SuggestRecipesInput {
    pub ingredients: Vec<IngredientName>,
}

pub fn ensure_valid_ingredients(ingredients: &[IngredientName]) -> Result<(), CoreError> {
    if ingredients.is_empty() {
        return Err(CoreError::InvalidInput(INVALID_INGREDIENTS_MESSAGE.to_string()));
    }

    Ok(())
}
