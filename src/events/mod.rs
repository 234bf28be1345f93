// src/events/mod.rs
//
// Event layer: typed, synchronous notifications services emit so the UI
// boundary can show progressive feedback without polling service state.

pub mod event_bus;
pub mod types;

pub use event_bus::{EventBus, EventLogEntry};
pub use types::{
    DomainEvent, GenerationFailed, GenerationStarted, IngredientsRecognized, RecipeDeleted,
    RecipeImageResolved, RecipeSaved, RecipesEnriched, RecipesGenerated, StoresFound,
};

use std::sync::Arc;

/// Create a shared event bus.
pub fn create_event_bus() -> Arc<EventBus> {
    Arc::new(EventBus::new())
}
