pub mod entity;
pub mod invariants;

pub use entity::{Recipe, RecipeIngredient};
pub use invariants::validate_recipe;
