// src/application/commands/recipe_commands.rs
//
// Generation trigger and pipeline observation.

use crate::application::dto::GenerationStateDto;
use crate::application::state::AppState;
use crate::domain::{MealTime, Recipe};

/// Run one generation request for the current ingredient list.
///
/// The UI disables the trigger while `generation_state().busy` is set;
/// the service guards against a concurrent trigger anyway.
pub async fn generate_recipes(state: &AppState, meal_time: &str) -> Result<Vec<Recipe>, String> {
    let meal_time = parse_meal_time(meal_time)?;
    let ingredients = state.ingredient_service.list();

    state
        .recipe_service
        .generate(&ingredients, meal_time)
        .await
        .map_err(|e| e.to_string())
}

/// Observable pipeline state: phase, published recipes, error.
pub fn generation_state(state: &AppState) -> GenerationStateDto {
    GenerationStateDto::from(state.recipe_service.snapshot())
}

fn parse_meal_time(value: &str) -> Result<MealTime, String> {
    match value {
        "breakfast" => Ok(MealTime::Breakfast),
        "lunch" => Ok(MealTime::Lunch),
        "dinner" => Ok(MealTime::Dinner),
        _ => Err(format!("Invalid meal time: {}", value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_meal_time() {
        assert_eq!(parse_meal_time("breakfast"), Ok(MealTime::Breakfast));
        assert_eq!(parse_meal_time("lunch"), Ok(MealTime::Lunch));
        assert_eq!(parse_meal_time("dinner"), Ok(MealTime::Dinner));
        assert!(parse_meal_time("brunch").is_err());
    }
}
