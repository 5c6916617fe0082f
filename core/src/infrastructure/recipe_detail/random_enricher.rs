use rand::{Rng, seq::SliceRandom};

use crate::domain::{
    recipe::entities::RecipeCandidate,
    recipe_detail::{
        entities::{Instruction, NutrientValue, NutritionFacts},
        ports::PresentationEnricher,
    },
};

const UNITS: [&str; 6] = ["g", "cups", "tbsp", "tsp", "oz", "ml"];

const EQUIPMENT: [&str; 6] = [
    "Large skillet or frying pan",
    "Cutting board",
    "Chef's knife",
    "Measuring cups and spoons",
    "Mixing bowl",
    "Wooden spoon",
];

const PREP_STEPS: [&str; 4] = [
    "Prepare all ingredients. Wash and chop the vegetables.",
    "Measure out all ingredients and set aside.",
    "Preheat your oven to 375°F (190°C).",
    "Heat a large pan over medium heat with olive oil.",
];

/// Placeholder content generator for recipe detail views.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPresentationEnricher;

impl RandomPresentationEnricher {
    pub fn new() -> Self {
        Self
    }
}

fn pick<'a>(items: &[&'a str]) -> &'a str {
    items.choose(&mut rand::thread_rng()).copied().unwrap_or_default()
}

fn ingredient_or<'a>(ingredients: &'a [String], index: usize, fallback: &'a str) -> &'a str {
    ingredients.get(index).map(String::as_str).unwrap_or(fallback)
}

impl PresentationEnricher for RandomPresentationEnricher {
    fn ingredient_amount(&self, _ingredient: &str) -> String {
        let mut rng = rand::thread_rng();
        let unit = pick(&UNITS);

        let amount = match unit {
            "g" | "ml" => rng.gen_range(50..550),
            "cups" => rng.gen_range(1..=3),
            _ => rng.gen_range(1..=4),
        };

        format!("{} {}", amount, unit)
    }

    fn instructions(&self, recipe: &RecipeCandidate) -> Vec<Instruction> {
        let matched = &recipe.matched_ingredients;
        let missing = &recipe.missing_ingredients;

        let cooking_steps = [
            format!(
                "Add the {} to the pan and cook for 5 minutes.",
                ingredient_or(matched, 0, "ingredients")
            ),
            format!(
                "Combine {} with {} and mix well.",
                ingredient_or(matched, 1, "ingredients"),
                ingredient_or(matched, 0, "other ingredients")
            ),
            "Simmer for 10-15 minutes until the flavors meld together.".to_string(),
            "Season with salt and pepper to taste.".to_string(),
            format!(
                "Add the {} and stir to combine.",
                ingredient_or(missing, 0, "remaining ingredients")
            ),
        ];

        let finishing_steps = [
            "Serve hot, garnished with fresh herbs.".to_string(),
            "Let rest for 5 minutes before serving.".to_string(),
            "Divide evenly among plates and enjoy immediately.".to_string(),
            format!(
                "Garnish with {} before serving.",
                ingredient_or(missing, 1, "fresh herbs")
            ),
        ];

        let mut rng = rand::thread_rng();
        let step_count = rng.gen_range(4..=6);

        let mut steps = vec![pick(&PREP_STEPS).to_string()];
        steps.extend(
            cooking_steps
                .iter()
                .cycle()
                .take(step_count - 2)
                .cloned(),
        );
        steps.extend(finishing_steps.choose(&mut rng).cloned());

        steps
            .into_iter()
            .enumerate()
            .map(|(index, text)| Instruction {
                step: index as u32 + 1,
                text,
            })
            .collect()
    }

    fn equipment(&self) -> Vec<String> {
        let mut rng = rand::thread_rng();
        let count = rng.gen_range(3..=5);

        EQUIPMENT
            .choose_multiple(&mut rng, count)
            .map(|item| item.to_string())
            .collect()
    }

    fn nutrition(&self) -> NutritionFacts {
        let mut rng = rand::thread_rng();
        let mut between = |low: u32, span: u32| low + rng.gen_range(0..span);

        let calories = format!("{} kcal", between(200, 400));
        let macros = vec![
            NutrientValue::new("Total Fat", format!("{}g", between(5, 20))),
            NutrientValue::new("Saturated Fat", format!("{}g", between(2, 8))),
            NutrientValue::new("Carbohydrates", format!("{}g", between(20, 40))),
            NutrientValue::new("Fiber", format!("{}g", between(1, 5))),
            NutrientValue::new("Sugars", format!("{}g", between(1, 10))),
            NutrientValue::new("Protein", format!("{}g", between(10, 25))),
            NutrientValue::new("Sodium", format!("{}mg", between(100, 500))),
        ];
        let vitamins = vec![
            NutrientValue::new("Vitamin A", format!("{}%", between(5, 20))),
            NutrientValue::new("Vitamin C", format!("{}%", between(10, 40))),
            NutrientValue::new("Calcium", format!("{}%", between(5, 15))),
            NutrientValue::new("Iron", format!("{}%", between(5, 20))),
        ];

        NutritionFacts {
            calories,
            macros,
            vitamins,
        }
    }

    fn chef_tip(&self, title: &str) -> String {
        let tips = [
            format!(
                "For the best flavor in this {}, use fresh herbs instead of dried whenever possible.",
                title
            ),
            format!(
                "This {} can be prepared up to a day in advance and refrigerated until ready to cook.",
                title
            ),
            format!(
                "For a spicier version of this {}, add a pinch of red pepper flakes or a diced jalapeño.",
                title
            ),
            format!(
                "To make this {} more filling, consider adding some protein like grilled chicken or tofu.",
                title
            ),
            format!(
                "The key to a perfect {} is not to overcook the vegetables - they should still have some bite to them.",
                title
            ),
        ];

        tips.choose(&mut rand::thread_rng())
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::{domain::recipe::entities::RecipeCandidate, infrastructure::recipe::default_templates};

    fn candidate() -> RecipeCandidate {
        let template = &default_templates()[2];
        RecipeCandidate::new(
            template,
            vec!["tomatoes".to_string(), "basil".to_string()],
            vec![
                "olive oil".to_string(),
                "cheese".to_string(),
                "balsamic vinegar".to_string(),
            ],
        )
    }

    #[test]
    fn test_ingredient_amount_shape() {
        let enricher = RandomPresentationEnricher::new();
        for _ in 0..50 {
            let amount = enricher.ingredient_amount("basil");
            let (value, unit) = amount.split_once(' ').unwrap();
            let value: u32 = value.parse().unwrap();
            assert!(UNITS.contains(&unit));
            match unit {
                "g" | "ml" => assert!((50..550).contains(&value)),
                "cups" => assert!((1..=3).contains(&value)),
                _ => assert!((1..=4).contains(&value)),
            }
        }
    }

    #[test]
    fn test_instructions_are_numbered_four_to_six_steps() {
        let enricher = RandomPresentationEnricher::new();
        for _ in 0..20 {
            let steps = enricher.instructions(&candidate());
            assert!((4..=6).contains(&steps.len()));
            for (index, step) in steps.iter().enumerate() {
                assert_eq!(step.step as usize, index + 1);
            }
            assert_eq!(
                steps[1].text,
                "Add the tomatoes to the pan and cook for 5 minutes."
            );
        }
    }

    #[test]
    fn test_instructions_fall_back_without_ingredients() {
        let mut recipe = candidate();
        recipe.matched_ingredients.clear();
        let steps = RandomPresentationEnricher::new().instructions(&recipe);
        assert_eq!(
            steps[1].text,
            "Add the ingredients to the pan and cook for 5 minutes."
        );
    }

    #[test]
    fn test_equipment_is_distinct_subset() {
        let enricher = RandomPresentationEnricher::new();
        for _ in 0..20 {
            let items = enricher.equipment();
            assert!((3..=5).contains(&items.len()));
            let unique: HashSet<_> = items.iter().collect();
            assert_eq!(unique.len(), items.len());
            assert!(items.iter().all(|item| EQUIPMENT.contains(&item.as_str())));
        }
    }

    #[test]
    fn test_nutrition_shape() {
        let facts = RandomPresentationEnricher::new().nutrition();
        assert!(facts.calories.ends_with(" kcal"));
        assert_eq!(facts.macros.len(), 7);
        assert_eq!(facts.vitamins.len(), 4);
    }

    #[test]
    fn test_chef_tip_mentions_title() {
        let tip = RandomPresentationEnricher::new().chef_tip("Tomato Soup");
        assert!(tip.contains("Tomato Soup"));
    }
}
