// src/application/commands/saved_recipe_commands.rs
//
// Recipe book controls.

use crate::application::state::AppState;
use crate::domain::Recipe;

/// Save a recipe from the detail view. Duplicate names are a no-op.
pub fn save_recipe(state: &AppState, recipe: Recipe) -> Result<bool, String> {
    state
        .saved_recipe_service
        .save(recipe)
        .map_err(|e| e.to_string())
}

/// Delete from the recipe book by exact name.
pub fn delete_saved_recipe(state: &AppState, name: &str) -> Result<bool, String> {
    state
        .saved_recipe_service
        .delete(name)
        .map_err(|e| e.to_string())
}

/// Bookmark state for the detail view.
pub fn is_recipe_saved(state: &AppState, name: &str) -> bool {
    state.saved_recipe_service.is_saved(name)
}

/// The recipe book, most-recent-first.
pub fn list_saved_recipes(state: &AppState) -> Vec<Recipe> {
    state.saved_recipe_service.list()
}
