use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::recipe::entities::{Difficulty, RecipeCandidate};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail {
    pub recipe_id: Uuid,
    pub title: String,
    pub image: String,
    pub cook_time: String,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub calories: u32,
    pub ingredients: Vec<IngredientLine>,
    pub equipment: Vec<String>,
    pub instructions: Vec<Instruction>,
    pub nutrition: NutritionFacts,
    pub chef_tip: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IngredientLine {
    pub name: String,
    pub amount: String,
    pub is_matched: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Instruction {
    pub step: u32,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NutritionFacts {
    pub calories: String,
    pub macros: Vec<NutrientValue>,
    pub vitamins: Vec<NutrientValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NutrientValue {
    pub name: String,
    pub value: String,
}

impl NutrientValue {
    pub fn new(name: &str, value: String) -> Self {
        Self {
            name: name.to_string(),
            value,
        }
    }
}

impl RecipeDetail {
    /// Copies the candidate's fields; enrichment fills the rest.
    pub fn from_candidate(
        candidate: &RecipeCandidate,
        ingredients: Vec<IngredientLine>,
        equipment: Vec<String>,
        instructions: Vec<Instruction>,
        nutrition: NutritionFacts,
        chef_tip: String,
    ) -> Self {
        Self {
            recipe_id: candidate.id,
            title: candidate.title.clone(),
            image: candidate.image.clone(),
            cook_time: candidate.cook_time.clone(),
            servings: candidate.servings,
            difficulty: candidate.difficulty,
            calories: candidate.calories,
            ingredients,
            equipment,
            instructions,
            nutrition,
            chef_tip,
        }
    }
}
