// src/repositories/saved_recipe_repository.rs
//
// Saved recipe persistence.
//
// The collection lives under a single fixed key in the `storage` bucket,
// serialized as one JSON document. It is read once at startup and rewritten
// wholesale on every mutation — there is no incremental diffing, and two
// processes racing on the bucket resolve as last-writer-wins.

use std::sync::{Arc, Mutex};

use rusqlite::{params, OptionalExtension};

use crate::db::ConnectionPool;
use crate::domain::Recipe;
use crate::error::AppResult;

/// Fixed namespace key for the saved recipe collection.
const SAVED_RECIPES_KEY: &str = "fridge-chef.saved-recipes";

pub trait SavedRecipeRepository: Send + Sync {
    /// Read the whole persisted collection. Missing key means empty.
    fn load(&self) -> AppResult<Vec<Recipe>>;

    /// Overwrite the whole persisted collection.
    fn persist(&self, recipes: &[Recipe]) -> AppResult<()>;
}

pub struct SqliteSavedRecipeRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteSavedRecipeRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

impl SavedRecipeRepository for SqliteSavedRecipeRepository {
    fn load(&self) -> AppResult<Vec<Recipe>> {
        let conn = self.pool.get()?;

        let value: Option<String> = conn
            .query_row(
                "SELECT value FROM storage WHERE key = ?1",
                params![SAVED_RECIPES_KEY],
                |row| row.get(0),
            )
            .optional()?;

        match value {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    fn persist(&self, recipes: &[Recipe]) -> AppResult<()> {
        let conn = self.pool.get()?;
        let json = serde_json::to_string(recipes)?;

        conn.execute(
            "INSERT OR REPLACE INTO storage (key, value, updated_at)
             VALUES (?1, ?2, datetime('now'))",
            params![SAVED_RECIPES_KEY, json],
        )?;

        Ok(())
    }
}

/// Non-durable repository for tests and throwaway sessions.
pub struct InMemorySavedRecipeRepository {
    recipes: Mutex<Vec<Recipe>>,
}

impl InMemorySavedRecipeRepository {
    pub fn new() -> Self {
        Self {
            recipes: Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemorySavedRecipeRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl SavedRecipeRepository for InMemorySavedRecipeRepository {
    fn load(&self) -> AppResult<Vec<Recipe>> {
        Ok(self.recipes.lock().unwrap().clone())
    }

    fn persist(&self, recipes: &[Recipe]) -> AppResult<()> {
        *self.recipes.lock().unwrap() = recipes.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_connection_pool_at, create_in_memory_pool, get_connection, initialize_database};
    use crate::domain::RecipeIngredient;

    fn recipe(name: &str) -> Recipe {
        Recipe {
            recipe_name: name.to_string(),
            cuisine_type: None,
            description: format!("{} description", name),
            ingredients: vec![RecipeIngredient {
                name: "salt".to_string(),
                is_available: true,
            }],
            steps: vec!["Cook it".to_string()],
            chef_tips: None,
            cooking_time: "10 minutes".to_string(),
            calories: None,
            image_url: None,
        }
    }

    fn sqlite_repo() -> SqliteSavedRecipeRepository {
        let pool = Arc::new(create_in_memory_pool().unwrap());
        let conn = get_connection(&pool).unwrap();
        initialize_database(&conn).unwrap();
        SqliteSavedRecipeRepository::new(pool)
    }

    #[test]
    fn test_load_missing_key_is_empty() {
        let repo = sqlite_repo();
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_persist_then_load() {
        let repo = sqlite_repo();
        let recipes = vec![recipe("Pancakes"), recipe("Waffles")];

        repo.persist(&recipes).unwrap();
        let loaded = repo.load().unwrap();

        assert_eq!(loaded, recipes);
    }

    #[test]
    fn test_persist_overwrites_wholesale() {
        let repo = sqlite_repo();

        repo.persist(&[recipe("Pancakes"), recipe("Waffles")]).unwrap();
        repo.persist(&[recipe("Toast")]).unwrap();

        let loaded = repo.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].recipe_name, "Toast");
    }

    #[test]
    fn test_round_trip_survives_pool_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipes.db");

        let saved = vec![recipe("Bibimbap"), recipe("Gyoza"), recipe("Paella")];

        {
            let pool = Arc::new(create_connection_pool_at(&path).unwrap());
            let conn = get_connection(&pool).unwrap();
            initialize_database(&conn).unwrap();
            let repo = SqliteSavedRecipeRepository::new(pool);
            repo.persist(&saved).unwrap();
        }

        // Fresh pool against the same file, as on next startup
        let pool = Arc::new(create_connection_pool_at(&path).unwrap());
        let conn = get_connection(&pool).unwrap();
        initialize_database(&conn).unwrap();
        let repo = SqliteSavedRecipeRepository::new(pool);

        let names: Vec<String> = repo
            .load()
            .unwrap()
            .into_iter()
            .map(|r| r.recipe_name)
            .collect();
        assert_eq!(names, vec!["Bibimbap", "Gyoza", "Paella"]);
    }
}
