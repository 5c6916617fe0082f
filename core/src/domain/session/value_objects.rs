use uuid::Uuid;

use crate::domain::{ingredient::entities::IngredientName, ingredient::value_objects::ImageSource};

#[derive(Debug, Clone)]
pub struct StartSessionFromImageInput {
    pub image: ImageSource,
}

#[derive(Debug, Clone)]
pub struct StartSessionFromIngredientsInput {
    pub ingredients: Vec<IngredientName>,
}

#[derive(Debug, Clone)]
pub struct GetSessionInput {
    pub session_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct FavoriteRecipeInput {
    pub session_id: Uuid,
    pub recipe_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct DeleteSessionInput {
    pub session_id: Uuid,
}
