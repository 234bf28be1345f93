// src/application/commands/ingredient_commands.rs
//
// Ingredient list controls + fridge photo scanning.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::application::state::AppState;

/// Add one typed ingredient. Returns whether it was new.
pub fn add_ingredient(state: &AppState, name: &str) -> bool {
    state.ingredient_service.add(name)
}

/// Remove an ingredient by its name (the stable row key).
pub fn remove_ingredient(state: &AppState, name: &str) -> bool {
    state.ingredient_service.remove(name)
}

/// Positional removal for UIs that still key rows by index.
pub fn remove_ingredient_at(state: &AppState, index: usize) -> Option<String> {
    state.ingredient_service.remove_at(index)
}

/// Current ingredient list, in insertion order.
pub fn list_ingredients(state: &AppState) -> Vec<String> {
    state.ingredient_service.list()
}

/// Scan a captured fridge photo (base64-encoded by the capture control)
/// and merge the recognized ingredients into the list.
///
/// Returns the number of new ingredients, or the generic analysis error
/// for the scanning overlay to display.
pub async fn scan_fridge_photo(
    state: &AppState,
    image_base64: &str,
    mime_type: &str,
) -> Result<usize, String> {
    let image = BASE64
        .decode(image_base64)
        .map_err(|e| format!("Invalid image payload: {}", e))?;

    state
        .vision_service
        .scan_and_merge(&image, mime_type)
        .await
        .map_err(|e| e.to_string())
}
