use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_timestamp},
    ingredient::entities::IngredientName,
    recipe::entities::RecipeCandidate,
};

/// Result set held for one results-viewing flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSession {
    pub id: Uuid,
    pub ingredients: Vec<IngredientName>,
    pub recipes: Vec<SessionRecipe>,
    pub image_sha256: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecipe {
    pub recipe: RecipeCandidate,
    pub is_favorite: bool,
}

impl RecipeSession {
    pub fn new(
        ingredients: Vec<IngredientName>,
        recipes: Vec<RecipeCandidate>,
        image_sha256: Option<String>,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            ingredients,
            recipes: recipes
                .into_iter()
                .map(|recipe| SessionRecipe {
                    recipe,
                    is_favorite: false,
                })
                .collect(),
            image_sha256,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn find_recipe(&self, recipe_id: Uuid) -> Option<&SessionRecipe> {
        self.recipes.iter().find(|r| r.recipe.id == recipe_id)
    }

    /// Flags a recipe as favorite. Repeating the call is a no-op.
    pub fn mark_favorite(&mut self, recipe_id: Uuid) -> Result<SessionRecipe, CoreError> {
        let entry = self
            .recipes
            .iter_mut()
            .find(|r| r.recipe.id == recipe_id)
            .ok_or(CoreError::NotFound)?;

        entry.is_favorite = true;
        let entry = entry.clone();
        self.updated_at = Utc::now();

        Ok(entry)
    }

    pub fn is_expired(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        let ttl = chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::MAX);
        now.signed_duration_since(self.updated_at) > ttl
    }
}
