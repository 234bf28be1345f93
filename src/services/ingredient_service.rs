// src/services/ingredient_service.rs
//
// The in-memory ingredient list: ordered, deduplicated, session-only.
//
// Uniqueness is case-sensitive exact-string equality — no normalization,
// no fuzzy merging. Insertion order is preserved. Nothing here persists
// or emits events; this is pure session state.

use std::sync::Mutex;

pub struct IngredientService {
    items: Mutex<Vec<String>>,
}

impl IngredientService {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
        }
    }

    /// Add one ingredient name.
    ///
    /// The name is trimmed first; empty or already-present names are a
    /// silent no-op. Returns whether the name was actually added.
    pub fn add(&self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }

        let mut items = self.items.lock().unwrap();
        if items.iter().any(|existing| existing == name) {
            return false;
        }
        items.push(name.to_string());
        true
    }

    /// Merge a recognized batch into the list.
    ///
    /// Each candidate is checked against the live container, so duplicates
    /// inside the batch collapse on their first occurrence and relative
    /// order of first appearance is preserved. Returns how many survived.
    pub fn add_many(&self, names: &[String]) -> usize {
        names.iter().filter(|name| self.add(name)).count()
    }

    /// Remove by the stable key: the exact name string.
    /// Absent names are a silent no-op. Returns whether anything was removed.
    pub fn remove(&self, name: &str) -> bool {
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|existing| existing != name);
        items.len() != before
    }

    /// Positional removal for list-style UIs.
    ///
    /// A stale index (the list changed between render and click) is a
    /// silent no-op rather than a panic. Prefer [`remove`] where the UI
    /// can key rows by name.
    pub fn remove_at(&self, index: usize) -> Option<String> {
        let mut items = self.items.lock().unwrap();
        if index < items.len() {
            Some(items.remove(index))
        } else {
            None
        }
    }

    /// Snapshot of the current list, in insertion order.
    pub fn list(&self) -> Vec<String> {
        self.items.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.items.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.lock().unwrap().is_empty()
    }

    pub fn clear(&self) {
        self.items.lock().unwrap().clear();
    }
}

impl Default for IngredientService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_preserves_insertion_order() {
        let service = IngredientService::new();
        assert!(service.add("egg"));
        assert!(service.add("milk"));
        assert!(service.add("tofu"));
        assert_eq!(service.list(), vec!["egg", "milk", "tofu"]);
    }

    #[test]
    fn test_add_rejects_duplicates_and_blanks() {
        let service = IngredientService::new();
        assert!(service.add("egg"));
        assert!(!service.add("egg"));
        assert!(!service.add("  egg  "));
        assert!(!service.add("   "));
        assert_eq!(service.len(), 1);
    }

    #[test]
    fn test_dedup_is_case_sensitive() {
        let service = IngredientService::new();
        assert!(service.add("Egg"));
        assert!(service.add("egg"));
        assert_eq!(service.len(), 2);
    }

    #[test]
    fn test_add_many_collapses_batch_duplicates() {
        let service = IngredientService::new();
        service.add("egg");

        let batch = vec![
            "milk".to_string(),
            "egg".to_string(),
            "milk".to_string(),
            "tofu".to_string(),
        ];
        let added = service.add_many(&batch);

        assert_eq!(added, 2);
        assert_eq!(service.list(), vec!["egg", "milk", "tofu"]);
    }

    #[test]
    fn test_remove_by_name() {
        let service = IngredientService::new();
        service.add("egg");
        service.add("milk");

        assert!(service.remove("egg"));
        assert!(!service.remove("egg"));
        assert_eq!(service.list(), vec!["milk"]);
    }

    #[test]
    fn test_stale_index_removal_is_a_noop() {
        let service = IngredientService::new();
        service.add("egg");

        assert_eq!(service.remove_at(0), Some("egg".to_string()));
        assert_eq!(service.remove_at(0), None);
        assert!(service.is_empty());
    }
}
