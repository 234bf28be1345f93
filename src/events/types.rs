// src/events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// INGREDIENT EVENTS
// ============================================================================

/// Emitted when a fridge photo scan finished and its names were merged
/// into the ingredient list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientsRecognized {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub recognized: usize,
    pub added: usize,
}

impl IngredientsRecognized {
    pub fn new(recognized: usize, added: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            recognized,
            added,
        }
    }
}

impl DomainEvent for IngredientsRecognized {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "IngredientsRecognized"
    }
}

// ============================================================================
// GENERATION PIPELINE EVENTS
// ============================================================================

/// Emitted when a generation request passed its guards and the text call
/// is about to be issued.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationStarted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub ingredient_count: usize,
    pub meal_time: String,
}

impl GenerationStarted {
    pub fn new(ingredient_count: usize, meal_time: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            ingredient_count,
            meal_time,
        }
    }
}

impl DomainEvent for GenerationStarted {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "GenerationStarted"
    }
}

/// Emitted when the text-only recipe list was published (photos pending).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipesGenerated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub recipe_names: Vec<String>,
}

impl RecipesGenerated {
    pub fn new(recipe_names: Vec<String>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            recipe_names,
        }
    }
}

impl DomainEvent for RecipesGenerated {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "RecipesGenerated"
    }
}

/// Emitted once per recipe when its image synthesis settled.
/// `has_image = false` is the designed degraded state, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeImageResolved {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub recipe_name: String,
    pub has_image: bool,
}

impl RecipeImageResolved {
    pub fn new(recipe_name: String, has_image: bool) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            recipe_name,
            has_image,
        }
    }
}

impl DomainEvent for RecipeImageResolved {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "RecipeImageResolved"
    }
}

/// Emitted when the final, image-enriched list replaced the text-only one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipesEnriched {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub recipe_count: usize,
    pub images_resolved: usize,
}

impl RecipesEnriched {
    pub fn new(recipe_count: usize, images_resolved: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            recipe_count,
            images_resolved,
        }
    }
}

impl DomainEvent for RecipesEnriched {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "RecipesEnriched"
    }
}

/// Emitted when text generation failed and the pipeline aborted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationFailed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub message: String,
}

impl GenerationFailed {
    pub fn new(message: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            message,
        }
    }
}

impl DomainEvent for GenerationFailed {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "GenerationFailed"
    }
}

// ============================================================================
// SAVED RECIPE EVENTS
// ============================================================================

/// Emitted when a recipe was added to the saved collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeSaved {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub recipe_name: String,
}

impl RecipeSaved {
    pub fn new(recipe_name: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            recipe_name,
        }
    }
}

impl DomainEvent for RecipeSaved {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "RecipeSaved"
    }
}

/// Emitted when a recipe was removed from the saved collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeDeleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub recipe_name: String,
}

impl RecipeDeleted {
    pub fn new(recipe_name: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            recipe_name,
        }
    }
}

impl DomainEvent for RecipeDeleted {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "RecipeDeleted"
    }
}

// ============================================================================
// STORE SEARCH EVENTS
// ============================================================================

/// Emitted when a nearby-store search settled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoresFound {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub count: usize,
}

impl StoresFound {
    pub fn new(count: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            count,
        }
    }
}

impl DomainEvent for StoresFound {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "StoresFound"
    }
}
