use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::generate_uuid_v7, ingredient::entities::IngredientName};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Catalog entry describing a dish and its full ingredient list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeTemplate {
    pub title: String,
    pub possible_ingredients: Vec<IngredientName>,
    pub cook_time: String,
    pub image: String,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub calories: u32,
}

/// Ranked suggestion derived from a template and the caller's ingredients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCandidate {
    pub id: Uuid,
    pub title: String,
    pub matched_ingredients: Vec<IngredientName>,
    pub missing_ingredients: Vec<IngredientName>,
    pub cook_time: String,
    pub image: String,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub calories: u32,
}

impl RecipeCandidate {
    pub fn new(
        template: &RecipeTemplate,
        matched_ingredients: Vec<IngredientName>,
        missing_ingredients: Vec<IngredientName>,
    ) -> Self {
        Self {
            id: generate_uuid_v7(),
            title: template.title.clone(),
            matched_ingredients,
            missing_ingredients,
            cook_time: template.cook_time.clone(),
            image: template.image.clone(),
            servings: template.servings,
            difficulty: template.difficulty,
            calories: template.calories,
        }
    }
}
