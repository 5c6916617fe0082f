use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::entities::RecipeCandidate,
    recipe_detail::{
        entities::{Instruction, NutritionFacts, RecipeDetail},
        value_objects::GetRecipeDetailInput,
    },
};

/// Supplies presentation-only content for a recipe detail view.
#[cfg_attr(test, mockall::automock)]
pub trait PresentationEnricher: Send + Sync {
    /// Quantity label such as `"2 cups"`.
    fn ingredient_amount(&self, ingredient: &str) -> String;

    fn instructions(&self, recipe: &RecipeCandidate) -> Vec<Instruction>;

    fn equipment(&self) -> Vec<String>;

    fn nutrition(&self) -> NutritionFacts;

    fn chef_tip(&self, title: &str) -> String;
}

pub trait RecipeDetailService: Send + Sync {
    fn get_recipe_detail(
        &self,
        input: GetRecipeDetailInput,
    ) -> impl Future<Output = Result<RecipeDetail, CoreError>> + Send;
}
