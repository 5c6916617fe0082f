use std::{path::Path, sync::Arc};

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::{Difficulty, RecipeTemplate},
        ports::RecipeCatalogRepository,
    },
};

/// Immutable catalog held in memory for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct StaticRecipeCatalog {
    templates: Arc<Vec<RecipeTemplate>>,
}

impl Default for StaticRecipeCatalog {
    fn default() -> Self {
        Self::new(default_templates())
    }
}

impl StaticRecipeCatalog {
    pub fn new(templates: Vec<RecipeTemplate>) -> Self {
        Self {
            templates: Arc::new(templates),
        }
    }

    /// Loads a JSON array of templates (camelCase fields).
    pub fn from_json_file(path: &Path) -> Result<Self, CoreError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CoreError::Configuration(format!(
                "cannot read recipe catalog {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self, CoreError> {
        let templates: Vec<RecipeTemplate> = serde_json::from_str(content)
            .map_err(|e| CoreError::Configuration(format!("invalid recipe catalog: {}", e)))?;

        if let Some(template) = templates.iter().find(|t| t.title.trim().is_empty()) {
            return Err(CoreError::Configuration(format!(
                "recipe template without title: {:?}",
                template
            )));
        }

        tracing::info!("Loaded {} recipe templates", templates.len());

        Ok(Self::new(templates))
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl RecipeCatalogRepository for StaticRecipeCatalog {
    async fn list_templates(&self) -> Result<Vec<RecipeTemplate>, CoreError> {
        Ok(self.templates.as_ref().clone())
    }
}

fn placeholder_image(title: &str) -> String {
    format!(
        "/placeholder.svg?height=160&width=400&text={}",
        title.replace(' ', "+")
    )
}

fn template(
    title: &str,
    image_text: &str,
    ingredients: &[&str],
    cook_time: &str,
    servings: u32,
    difficulty: Difficulty,
    calories: u32,
) -> RecipeTemplate {
    RecipeTemplate {
        title: title.to_string(),
        possible_ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        cook_time: cook_time.to_string(),
        image: placeholder_image(image_text),
        servings,
        difficulty,
        calories,
    }
}

/// The built-in five-dish catalog.
pub fn default_templates() -> Vec<RecipeTemplate> {
    vec![
        template(
            "Pasta Primavera",
            "Pasta Primavera",
            &[
                "pasta",
                "tomatoes",
                "bell peppers",
                "onions",
                "garlic",
                "olive oil",
                "cheese",
                "basil",
            ],
            "25 minutes",
            4,
            Difficulty::Easy,
            420,
        ),
        template(
            "Vegetable Stir Fry",
            "Stir Fry",
            &[
                "bell peppers",
                "onions",
                "garlic",
                "olive oil",
                "soy sauce",
                "rice",
                "carrots",
            ],
            "20 minutes",
            3,
            Difficulty::Easy,
            380,
        ),
        template(
            "Caprese Salad",
            "Caprese Salad",
            &["tomatoes", "basil", "olive oil", "cheese", "balsamic vinegar"],
            "10 minutes",
            2,
            Difficulty::Easy,
            320,
        ),
        template(
            "Tomato Soup",
            "Tomato Soup",
            &[
                "tomatoes",
                "onions",
                "garlic",
                "olive oil",
                "basil",
                "cream",
                "vegetable stock",
            ],
            "35 minutes",
            4,
            Difficulty::Medium,
            280,
        ),
        template(
            "Cheese Omelette",
            "Cheese Omelette",
            &[
                "eggs",
                "cheese",
                "onions",
                "bell peppers",
                "olive oil",
                "salt",
                "pepper",
            ],
            "15 minutes",
            1,
            Difficulty::Easy,
            350,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_default_catalog_has_five_templates() {
        let templates = default_templates();
        assert_eq!(templates.len(), 5);
        assert_eq!(
            templates[1].image,
            "/placeholder.svg?height=160&width=400&text=Stir+Fry"
        );
        assert_eq!(templates[3].difficulty, Difficulty::Medium);
    }

    #[tokio::test]
    async fn test_list_templates_keeps_catalog_order() {
        let catalog = StaticRecipeCatalog::default();
        let titles: Vec<String> = catalog
            .list_templates()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();

        assert_eq!(
            titles,
            vec![
                "Pasta Primavera",
                "Vegetable Stir Fry",
                "Caprese Salad",
                "Tomato Soup",
                "Cheese Omelette"
            ]
        );
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{
                "title": "Guacamole",
                "possibleIngredients": ["avocado", "lime", "onions"],
                "cookTime": "10 minutes",
                "image": "/guacamole.svg",
                "servings": 4,
                "difficulty": "Easy",
                "calories": 230
            }}]"#
        )
        .unwrap();

        let catalog = StaticRecipeCatalog::from_json_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_from_json_rejects_unknown_difficulty() {
        let err = StaticRecipeCatalog::from_json_str(
            r#"[{"title": "X", "possibleIngredients": [], "cookTime": "1 minute",
                "image": "", "servings": 1, "difficulty": "Extreme", "calories": 1}]"#,
        )
        .unwrap_err();

        assert!(matches!(err, CoreError::Configuration(_)));
    }

    #[test]
    fn test_from_json_file_missing() {
        let err = StaticRecipeCatalog::from_json_file(Path::new("/nonexistent/catalog.json"))
            .unwrap_err();
        assert!(matches!(err, CoreError::Configuration(_)));
    }
}
