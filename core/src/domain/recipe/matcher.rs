use std::collections::HashSet;

use crate::domain::{
    ingredient::entities::IngredientName,
    recipe::entities::{RecipeCandidate, RecipeTemplate},
};

/// Templates sharing fewer ingredients than this with the input are dropped.
pub const MIN_MATCHED_INGREDIENTS: usize = 2;

/// Ranks catalog templates against the ingredients at hand.
///
/// Input ingredients are compared as a set, by exact string equality. Matched
/// and missing lists keep the template's ingredient order. Candidates are
/// sorted by matched count, descending; equal counts keep catalog order.
pub fn match_recipes(
    ingredients: &[IngredientName],
    catalog: &[RecipeTemplate],
) -> Vec<RecipeCandidate> {
    let available: HashSet<&str> = ingredients.iter().map(String::as_str).collect();

    let mut candidates: Vec<RecipeCandidate> = catalog
        .iter()
        .filter_map(|template| {
            let (matched, missing): (Vec<IngredientName>, Vec<IngredientName>) = template
                .possible_ingredients
                .iter()
                .cloned()
                .partition(|ingredient| available.contains(ingredient.as_str()));

            if matched.len() < MIN_MATCHED_INGREDIENTS {
                return None;
            }

            Some(RecipeCandidate::new(template, matched, missing))
        })
        .collect();

    // sort_by is stable
    candidates.sort_by(|a, b| {
        b.matched_ingredients
            .len()
            .cmp(&a.matched_ingredients.len())
    });

    candidates
}
