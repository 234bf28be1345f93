// src/services/recipe_service.rs
//
// The recipe aggregation pipeline.
//
// One generation request walks Idle -> GeneratingText -> GeneratingImages
// -> Done; Error is reachable from GeneratingText only. Text generation
// failure aborts the whole request; image failures are per-recipe and
// non-fatal. Both the text-only list and the final enriched list are
// published as whole-array replacements, so an observer sees either
// "no image yet" or "final image / confirmed absence", never a
// half-mutated element.

use std::sync::{Arc, Mutex};

use futures::future::join_all;
use serde::{Deserialize, Serialize};

use crate::domain::{validate_recipe, MealTime, Recipe};
use crate::error::{AppError, AppResult};
use crate::events::{
    EventBus, GenerationFailed, GenerationStarted, RecipeImageResolved, RecipesEnriched,
    RecipesGenerated,
};
use crate::integrations::GenerativeClient;

/// Pipeline phase for one generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationPhase {
    Idle,
    GeneratingText,
    GeneratingImages,
    Done,
    Error,
}

impl GenerationPhase {
    /// A request is in flight; the trigger stays disabled. There is no
    /// mid-flight cancellation.
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            GenerationPhase::GeneratingText | GenerationPhase::GeneratingImages
        )
    }
}

/// Observable pipeline state for the UI boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationSnapshot {
    pub phase: GenerationPhase,
    pub recipes: Vec<Recipe>,
    pub error: Option<String>,
}

struct PipelineState {
    phase: GenerationPhase,
    recipes: Vec<Recipe>,
    error: Option<String>,
}

pub struct RecipeService {
    client: Arc<dyn GenerativeClient>,
    event_bus: Arc<EventBus>,
    state: Mutex<PipelineState>,
}

impl RecipeService {
    pub fn new(client: Arc<dyn GenerativeClient>, event_bus: Arc<EventBus>) -> Self {
        Self {
            client,
            event_bus,
            state: Mutex::new(PipelineState {
                phase: GenerationPhase::Idle,
                recipes: Vec::new(),
                error: None,
            }),
        }
    }

    /// Run one full generation request.
    ///
    /// 1. Guards: a non-empty ingredient list, and no request in flight.
    ///    Neither guard changes state or touches the network.
    /// 2. Text generation; failure aborts to the Error phase with the
    ///    adapter's message verbatim and previous results cleared. A decoded
    ///    shape that violates the recipe invariants counts as the same
    ///    failure kind.
    /// 3. The text-only list is published immediately (recipes visible
    ///    without photos), then one image synthesis per recipe fans out in
    ///    parallel. A per-recipe image failure degrades that recipe to
    ///    "no photo" without dropping or reordering its siblings.
    ///
    /// Returns the final enriched list, which is also observable through
    /// [`snapshot`](Self::snapshot).
    pub async fn generate(
        &self,
        ingredients: &[String],
        meal_time: MealTime,
    ) -> AppResult<Vec<Recipe>> {
        if ingredients.is_empty() {
            return Err(AppError::NoIngredients);
        }

        {
            let mut state = self.state.lock().unwrap();
            if state.phase.is_busy() {
                return Err(AppError::GenerationInProgress);
            }
            state.phase = GenerationPhase::GeneratingText;
            state.recipes.clear();
            state.error = None;
        }

        self.event_bus.emit(GenerationStarted::new(
            ingredients.len(),
            meal_time.to_string(),
        ));

        let recipes = match self.client.generate_recipes(ingredients, meal_time).await {
            Ok(recipes) => recipes,
            Err(err) => return Err(self.abort(err)),
        };

        // Re-check the decoded shape: a contract violation from the service
        // is a generation failure, not a downstream surprise
        for recipe in &recipes {
            if let Err(violation) = validate_recipe(recipe) {
                return Err(self.abort(AppError::RecipeGeneration(violation.to_string())));
            }
        }

        // Publish the text-only list: the observable intermediate state
        {
            let mut state = self.state.lock().unwrap();
            state.recipes = recipes.clone();
            state.phase = GenerationPhase::GeneratingImages;
        }
        self.event_bus.emit(RecipesGenerated::new(
            recipes.iter().map(|r| r.recipe_name.clone()).collect(),
        ));

        // Fan out one image synthesis per recipe, no ordering between them.
        // The adapter absorbs its own failures, so join_all is a gather
        // with individual failure isolation.
        let images = join_all(recipes.iter().map(|recipe| {
            self.client
                .generate_recipe_image(&recipe.recipe_name, &recipe.description)
        }))
        .await;

        let mut images_resolved = 0;
        let enriched: Vec<Recipe> = recipes
            .into_iter()
            .zip(images)
            .map(|(mut recipe, image_url)| {
                self.event_bus.emit(RecipeImageResolved::new(
                    recipe.recipe_name.clone(),
                    image_url.is_some(),
                ));
                if image_url.is_some() {
                    images_resolved += 1;
                }
                recipe.image_url = image_url;
                recipe
            })
            .collect();

        {
            let mut state = self.state.lock().unwrap();
            state.recipes = enriched.clone();
            state.phase = GenerationPhase::Done;
        }
        self.event_bus
            .emit(RecipesEnriched::new(enriched.len(), images_resolved));

        Ok(enriched)
    }

    /// Current observable state (phase, published recipes, error).
    pub fn snapshot(&self) -> GenerationSnapshot {
        let state = self.state.lock().unwrap();
        GenerationSnapshot {
            phase: state.phase,
            recipes: state.recipes.clone(),
            error: state.error.clone(),
        }
    }

    pub fn phase(&self) -> GenerationPhase {
        self.state.lock().unwrap().phase
    }

    /// Abort to the Error phase, exposing the message verbatim and
    /// clearing any previous results.
    fn abort(&self, err: AppError) -> AppError {
        let message = err.to_string();
        {
            let mut state = self.state.lock().unwrap();
            state.phase = GenerationPhase::Error;
            state.recipes.clear();
            state.error = Some(message.clone());
        }
        log::error!("Recipe generation aborted: {}", message);
        self.event_bus.emit(GenerationFailed::new(message));
        err
    }
}
