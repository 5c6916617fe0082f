use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::{RecipeCandidate, RecipeTemplate},
        value_objects::SuggestRecipesInput,
    },
};

/// Source of the recipe templates, in catalog order.
pub trait RecipeCatalogRepository: Send + Sync {
    fn list_templates(
        &self,
    ) -> impl Future<Output = Result<Vec<RecipeTemplate>, CoreError>> + Send;
}

pub trait RecipeService: Send + Sync {
    fn suggest_recipes(
        &self,
        input: SuggestRecipesInput,
    ) -> impl Future<Output = Result<Vec<RecipeCandidate>, CoreError>> + Send;

    fn list_catalog(&self) -> impl Future<Output = Result<Vec<RecipeTemplate>, CoreError>> + Send;
}
