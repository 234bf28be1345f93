// src/application/state.rs

use std::sync::Arc;

use crate::db::{create_connection_pool, get_connection, initialize_database, ConnectionPool};
use crate::error::AppResult;
use crate::events::{create_event_bus, EventBus};
use crate::integrations::{GenerativeClient, LocationProvider};
use crate::repositories::{SavedRecipeRepository, SqliteSavedRecipeRepository};
use crate::services::{
    IngredientService, RecipeService, SavedRecipeService, StoreLocatorService, VisionService,
};

/// Application state managed by the UI shell.
/// All fields are Arc-wrapped for thread-safe sharing across commands.
pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub ingredient_service: Arc<IngredientService>,
    pub vision_service: Arc<VisionService>,
    pub recipe_service: Arc<RecipeService>,
    pub saved_recipe_service: Arc<SavedRecipeService>,
    pub store_locator_service: Arc<StoreLocatorService>,
}

impl AppState {
    /// Wire services against the default on-disk bucket.
    ///
    /// Opens the pool, applies the schema, and reads the saved collection
    /// once — after this the bucket is only touched on mutations.
    pub fn initialize(
        client: Arc<dyn GenerativeClient>,
        location: Arc<dyn LocationProvider>,
    ) -> AppResult<Self> {
        let pool = Arc::new(create_connection_pool()?);
        Self::initialize_with_pool(client, location, pool)
    }

    /// Wire services against an explicit pool (tests, custom data dirs).
    pub fn initialize_with_pool(
        client: Arc<dyn GenerativeClient>,
        location: Arc<dyn LocationProvider>,
        pool: Arc<ConnectionPool>,
    ) -> AppResult<Self> {
        let conn = get_connection(&pool)?;
        initialize_database(&conn)?;
        drop(conn);

        let event_bus = create_event_bus();
        let ingredient_service = Arc::new(IngredientService::new());

        let vision_service = Arc::new(VisionService::new(
            Arc::clone(&client),
            Arc::clone(&ingredient_service),
            Arc::clone(&event_bus),
        ));

        let recipe_service = Arc::new(RecipeService::new(
            Arc::clone(&client),
            Arc::clone(&event_bus),
        ));

        let saved_repo: Arc<dyn SavedRecipeRepository> =
            Arc::new(SqliteSavedRecipeRepository::new(Arc::clone(&pool)));
        let saved_recipe_service = Arc::new(SavedRecipeService::new(
            saved_repo,
            Arc::clone(&event_bus),
        ));
        saved_recipe_service.init()?;

        let store_locator_service = Arc::new(StoreLocatorService::new(
            Arc::clone(&client),
            location,
            Arc::clone(&event_bus),
        ));

        Ok(Self {
            event_bus,
            ingredient_service,
            vision_service,
            recipe_service,
            saved_recipe_service,
            store_locator_service,
        })
    }
}
