// src/services/saved_recipe_service.rs
//
// The user's recipe book: deduplicated by recipe name, most-recent-first,
// durable across sessions.
//
// The store is an explicitly owned, injected object: the bucket is read
// exactly once at init and rewritten wholesale on every mutation. The
// saved collection and the currently displayed generation results are
// independent — saving never mutates the displayed list and vice versa.

use std::sync::{Arc, Mutex};

use crate::domain::Recipe;
use crate::error::AppResult;
use crate::events::{EventBus, RecipeDeleted, RecipeSaved};
use crate::repositories::SavedRecipeRepository;

pub struct SavedRecipeService {
    repo: Arc<dyn SavedRecipeRepository>,
    event_bus: Arc<EventBus>,
    recipes: Mutex<Vec<Recipe>>,
}

impl SavedRecipeService {
    pub fn new(repo: Arc<dyn SavedRecipeRepository>, event_bus: Arc<EventBus>) -> Self {
        Self {
            repo,
            event_bus,
            recipes: Mutex::new(Vec::new()),
        }
    }

    /// Read the persisted collection. Called once at startup.
    pub fn init(&self) -> AppResult<()> {
        let loaded = self.repo.load()?;
        log::info!("Loaded {} saved recipes", loaded.len());
        *self.recipes.lock().unwrap() = loaded;
        Ok(())
    }

    /// Save a recipe. Duplicate names (exact match) are a no-op.
    /// New saves prepend, so the gallery lists most-recent-first.
    /// Returns whether the recipe was actually saved.
    pub fn save(&self, recipe: Recipe) -> AppResult<bool> {
        let name = recipe.recipe_name.clone();

        {
            let mut recipes = self.recipes.lock().unwrap();
            if recipes.iter().any(|r| r.recipe_name == name) {
                return Ok(false);
            }
            // Bucket first, memory second: a failed write leaves both unchanged
            let mut candidate = Vec::with_capacity(recipes.len() + 1);
            candidate.push(recipe);
            candidate.extend(recipes.iter().cloned());
            self.repo.persist(&candidate)?;
            *recipes = candidate;
        }

        self.event_bus.emit(RecipeSaved::new(name));
        Ok(true)
    }

    /// Delete by exact name. Absent names are a no-op, not an error.
    /// Returns whether anything was removed.
    pub fn delete(&self, name: &str) -> AppResult<bool> {
        {
            let mut recipes = self.recipes.lock().unwrap();
            let candidate: Vec<Recipe> = recipes
                .iter()
                .filter(|r| r.recipe_name != name)
                .cloned()
                .collect();
            if candidate.len() == recipes.len() {
                return Ok(false);
            }
            self.repo.persist(&candidate)?;
            *recipes = candidate;
        }

        self.event_bus.emit(RecipeDeleted::new(name.to_string()));
        Ok(true)
    }

    /// Membership check by name.
    pub fn is_saved(&self, name: &str) -> bool {
        self.recipes
            .lock()
            .unwrap()
            .iter()
            .any(|r| r.recipe_name == name)
    }

    /// Snapshot of the collection, most-recent-first.
    pub fn list(&self) -> Vec<Recipe> {
        self.recipes.lock().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    use crate::domain::RecipeIngredient;
    use crate::error::AppError;
    use crate::events::create_event_bus;
    use crate::repositories::InMemorySavedRecipeRepository;

    /// Repository whose writes can be made to fail on demand.
    struct FlakyRepo {
        inner: InMemorySavedRecipeRepository,
        fail_persist: AtomicBool,
    }

    impl FlakyRepo {
        fn new() -> Self {
            Self {
                inner: InMemorySavedRecipeRepository::new(),
                fail_persist: AtomicBool::new(false),
            }
        }
    }

    impl SavedRecipeRepository for FlakyRepo {
        fn load(&self) -> AppResult<Vec<Recipe>> {
            self.inner.load()
        }

        fn persist(&self, recipes: &[Recipe]) -> AppResult<()> {
            if self.fail_persist.load(Ordering::SeqCst) {
                return Err(AppError::Other("storage write failed".to_string()));
            }
            self.inner.persist(recipes)
        }
    }

    fn recipe(name: &str) -> Recipe {
        Recipe {
            recipe_name: name.to_string(),
            cuisine_type: None,
            description: "desc".to_string(),
            ingredients: vec![RecipeIngredient {
                name: "egg".to_string(),
                is_available: true,
            }],
            steps: vec!["cook".to_string()],
            chef_tips: None,
            cooking_time: "10 minutes".to_string(),
            calories: None,
            image_url: None,
        }
    }

    fn service_with_repo() -> (SavedRecipeService, Arc<InMemorySavedRecipeRepository>) {
        let repo = Arc::new(InMemorySavedRecipeRepository::new());
        let service = SavedRecipeService::new(
            Arc::clone(&repo) as Arc<dyn SavedRecipeRepository>,
            create_event_bus(),
        );
        service.init().unwrap();
        (service, repo)
    }

    #[test]
    fn test_duplicate_save_is_a_noop() {
        let (service, _) = service_with_repo();

        assert!(service.save(recipe("Pancakes")).unwrap());
        assert!(!service.save(recipe("Pancakes")).unwrap());
        assert_eq!(service.list().len(), 1);
    }

    #[test]
    fn test_new_saves_prepend() {
        let (service, _) = service_with_repo();

        service.save(recipe("First")).unwrap();
        service.save(recipe("Second")).unwrap();

        let names: Vec<String> = service.list().into_iter().map(|r| r.recipe_name).collect();
        assert_eq!(names, vec!["Second", "First"]);
    }

    #[test]
    fn test_delete_absent_name_does_not_error() {
        let (service, _) = service_with_repo();

        service.save(recipe("Pancakes")).unwrap();
        assert!(service.delete("Pancakes").unwrap());
        assert!(!service.delete("Pancakes").unwrap());
        assert!(!service.is_saved("Pancakes"));
    }

    #[test]
    fn test_every_mutation_persists_wholesale() {
        let (service, repo) = service_with_repo();

        service.save(recipe("A")).unwrap();
        service.save(recipe("B")).unwrap();
        service.delete("A").unwrap();

        let persisted = repo.load().unwrap();
        let names: Vec<String> = persisted.into_iter().map(|r| r.recipe_name).collect();
        assert_eq!(names, vec!["B"]);
    }

    #[test]
    fn test_failed_persist_does_not_admit_the_save() {
        let repo = Arc::new(FlakyRepo::new());
        let service = SavedRecipeService::new(
            Arc::clone(&repo) as Arc<dyn SavedRecipeRepository>,
            create_event_bus(),
        );
        service.init().unwrap();

        repo.fail_persist.store(true, Ordering::SeqCst);
        assert!(service.save(recipe("Pancakes")).is_err());

        // Memory still matches the bucket: nothing was admitted anywhere
        assert!(!service.is_saved("Pancakes"));
        assert!(service.list().is_empty());
        assert!(repo.inner.load().unwrap().is_empty());
    }

    #[test]
    fn test_failed_persist_keeps_the_deleted_recipe() {
        let repo = Arc::new(FlakyRepo::new());
        let service = SavedRecipeService::new(
            Arc::clone(&repo) as Arc<dyn SavedRecipeRepository>,
            create_event_bus(),
        );
        service.init().unwrap();
        service.save(recipe("Pancakes")).unwrap();

        repo.fail_persist.store(true, Ordering::SeqCst);
        assert!(service.delete("Pancakes").is_err());

        assert!(service.is_saved("Pancakes"));
        assert_eq!(repo.inner.load().unwrap().len(), 1);
    }

    #[test]
    fn test_reload_round_trip() {
        let repo = Arc::new(InMemorySavedRecipeRepository::new());

        {
            let service = SavedRecipeService::new(
                Arc::clone(&repo) as Arc<dyn SavedRecipeRepository>,
                create_event_bus(),
            );
            service.init().unwrap();
            service.save(recipe("A")).unwrap();
            service.save(recipe("B")).unwrap();
        }

        // Next session: same bucket, fresh service
        let service = SavedRecipeService::new(
            Arc::clone(&repo) as Arc<dyn SavedRecipeRepository>,
            create_event_bus(),
        );
        service.init().unwrap();

        assert!(service.is_saved("A"));
        assert!(service.is_saved("B"));
        assert_eq!(service.list().len(), 2);
    }
}
