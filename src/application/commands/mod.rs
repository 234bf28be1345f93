// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between the UI shell and Services
// - Commands accept DTOs/plain values, return DTOs
// - Commands convert errors to strings for the UI boundary
// - Commands NEVER contain business logic

pub mod ingredient_commands;
pub mod recipe_commands;
pub mod saved_recipe_commands;
pub mod shopping_commands;

pub use ingredient_commands::*;
pub use recipe_commands::*;
pub use saved_recipe_commands::*;
pub use shopping_commands::*;
