// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod ingredient_service;
pub mod recipe_service;
pub mod saved_recipe_service;
pub mod store_locator_service;
pub mod vision_service;


// Re-export all services and their types
pub use ingredient_service::IngredientService;

pub use recipe_service::{GenerationPhase, GenerationSnapshot, RecipeService};

pub use saved_recipe_service::SavedRecipeService;

pub use store_locator_service::StoreLocatorService;

pub use vision_service::VisionService;
