// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO invariant enforcement
// - NO event emission
// - Explicit SQL only

pub mod saved_recipe_repository;

pub use saved_recipe_repository::{
    InMemorySavedRecipeRepository, SavedRecipeRepository, SqliteSavedRecipeRepository,
};
