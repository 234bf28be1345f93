// src/integrations/gemini/mod.rs
//
// Generative-AI service integration.
//
// The service is an external collaborator reached through its existing
// request/response contract: inline JSON text constrained by a response
// schema, or inline binary image data with a MIME type. This crate never
// defines its own wire format on top of it.

pub mod client;
pub mod wire;

pub use client::{GeminiClient, GeminiConfig};

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::domain::{MealTime, Recipe, Store};
use crate::error::AppResult;

/// The four adapter operations the app needs from the AI service.
///
/// Behind a trait so services can be exercised against a mock; the single
/// production implementation is [`GeminiClient`].
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    /// Enumerate the food items visible in a fridge photo.
    ///
    /// Returns the raw recognized names: unfiltered, unvalidated and NOT
    /// deduplicated — merging against the ingredient list happens at the
    /// caller. Any failure is a single generic analysis error.
    async fn identify_ingredients(&self, image: &[u8], mime_type: &str)
        -> AppResult<Vec<String>>;

    /// Ask for exactly three structured recipes for the given ingredients
    /// and meal time. No element carries an image yet.
    async fn generate_recipes(
        &self,
        ingredients: &[String],
        meal_time: MealTime,
    ) -> AppResult<Vec<Recipe>>;

    /// Synthesize a plated-dish photo for one recipe, returned as a
    /// `data:<mime>;base64,<bytes>` URI.
    ///
    /// Never fails: every error is absorbed and becomes `None`. A recipe
    /// without a photo is a valid terminal state.
    async fn generate_recipe_image(&self, recipe_name: &str, description: &str)
        -> Option<String>;

    /// Grounded search for grocery stores near the given coordinates.
    /// Returns raw name/URI pairs from the grounding metadata; the caller
    /// deduplicates and caps the list.
    async fn search_nearby_stores(&self, latitude: f64, longitude: f64)
        -> AppResult<Vec<Store>>;
}
