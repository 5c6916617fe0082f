use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct GetRecipeDetailInput {
    pub session_id: Uuid,
    pub recipe_id: Uuid,
}
