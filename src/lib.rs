// src/lib.rs
// FridgeChef - Fridge-to-recipe assistant backend
//
// Architecture:
// - Domain-centric: entities and invariants live in domain/
// - Services orchestrate; repositories and integrations stay dumb
// - Event-driven: the pipeline reports progress through typed events
// - Local-first: the recipe book lives in a single on-device bucket
// - Application layer: the boundary the UI shell binds to

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;
pub mod integrations;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{validate_recipe, MealTime, Recipe, RecipeIngredient, Store};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus, DomainEvent, EventBus, EventLogEntry, GenerationFailed, GenerationStarted,
    IngredientsRecognized, RecipeDeleted, RecipeImageResolved, RecipeSaved, RecipesEnriched,
    RecipesGenerated, StoresFound,
};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{create_connection_pool, initialize_database, ConnectionPool};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    InMemorySavedRecipeRepository, SavedRecipeRepository, SqliteSavedRecipeRepository,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    GenerationPhase, GenerationSnapshot, IngredientService, RecipeService, SavedRecipeService,
    StoreLocatorService, VisionService,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::AppState;

// Re-export application submodules
pub use application::commands;
pub use application::dto;

// ============================================================================
// PUBLIC API - Integrations
// ============================================================================

pub use integrations::{
    Coordinates, GeminiClient, GeminiConfig, GenerativeClient, LocationProvider,
    StaticLocationProvider,
};
