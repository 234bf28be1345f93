use super::entity::Recipe;
use crate::domain::{DomainError, DomainResult};

/// Validates all Recipe invariants.
///
/// The AI service's schema contract promises these shapes, but the decoded
/// value is re-checked here so a contract violation surfaces as a generation
/// failure instead of propagating downstream.
pub fn validate_recipe(recipe: &Recipe) -> DomainResult<()> {
    validate_name(&recipe.recipe_name)?;
    validate_steps(recipe)?;
    validate_ingredients(recipe)?;
    Ok(())
}

/// Recipe name cannot be empty
fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Recipe name cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// A recipe must carry at least one preparation step
fn validate_steps(recipe: &Recipe) -> DomainResult<()> {
    if recipe.steps.is_empty() {
        return Err(DomainError::InvariantViolation(format!(
            "Recipe '{}' has no steps",
            recipe.recipe_name
        )));
    }
    Ok(())
}

/// A recipe must carry at least one ingredient line
fn validate_ingredients(recipe: &Recipe) -> DomainResult<()> {
    if recipe.ingredients.is_empty() {
        return Err(DomainError::InvariantViolation(format!(
            "Recipe '{}' has no ingredients",
            recipe.recipe_name
        )));
    }
    Ok(())
}

/// Invariants that must hold true for the Recipe domain:
///
/// 1. Identity is the recipe name; two recipes with the same name are the
///    same recipe for save/dedup purposes
/// 2. steps.len() >= 1
/// 3. ingredients.len() >= 1
/// 4. image_url may be absent at any point in a recipe's life
/// 5. The available/missing ingredient split comes from the AI service and
///    is never recomputed locally

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recipe::RecipeIngredient;

    fn valid_recipe() -> Recipe {
        Recipe {
            recipe_name: "Shakshuka".to_string(),
            cuisine_type: None,
            description: "Eggs poached in spiced tomato sauce".to_string(),
            ingredients: vec![RecipeIngredient {
                name: "eggs".to_string(),
                is_available: true,
            }],
            steps: vec!["Simmer sauce, crack in eggs".to_string()],
            chef_tips: None,
            cooking_time: "25 minutes".to_string(),
            calories: None,
            image_url: None,
        }
    }

    #[test]
    fn test_valid_recipe() {
        assert!(validate_recipe(&valid_recipe()).is_ok());
    }

    #[test]
    fn test_blank_name_fails() {
        let mut recipe = valid_recipe();
        recipe.recipe_name = "   ".to_string();
        assert!(validate_recipe(&recipe).is_err());
    }

    #[test]
    fn test_empty_steps_fails() {
        let mut recipe = valid_recipe();
        recipe.steps.clear();
        assert!(validate_recipe(&recipe).is_err());
    }

    #[test]
    fn test_empty_ingredients_fails() {
        let mut recipe = valid_recipe();
        recipe.ingredients.clear();
        assert!(validate_recipe(&recipe).is_err());
    }
}
