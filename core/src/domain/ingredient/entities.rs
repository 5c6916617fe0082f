use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Matching key for recipes, e.g. `"olive oil"`.
pub type IngredientName = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedIngredients {
    pub ingredients: Vec<IngredientName>,
    pub image_sha256: String,
}

/// Trims and lowercases raw labels, dropping blanks and repeated entries.
/// The first occurrence of each label keeps its position.
pub fn normalize_ingredient_names<I, S>(raw: I) -> Vec<IngredientName>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();

    raw.into_iter()
        .map(|name| name.as_ref().trim().to_lowercase())
        .filter(|name| !name.is_empty())
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_lowercases_and_dedupes() {
        let names = normalize_ingredient_names([" Tomatoes", "basil ", "", "TOMATOES", "  "]);
        assert_eq!(names, vec!["tomatoes".to_string(), "basil".to_string()]);
    }

    #[test]
    fn test_normalize_keeps_first_occurrence_order() {
        let names = normalize_ingredient_names(["garlic", "onions", "Garlic", "cheese"]);
        assert_eq!(names, vec!["garlic", "onions", "cheese"]);
    }
}
