// src/application/commands/shopping_commands.rs
//
// Shopping help from the recipe detail view: marketplace search links for
// a missing ingredient, a copyable shopping list, and the nearby-store
// search.

use crate::application::dto::MarketplaceLink;
use crate::application::state::AppState;
use crate::domain::{Recipe, Store};

/// External marketplace search links for one ingredient.
/// Fixed URL templates; the UI opens them in a new tab.
pub fn marketplace_links(ingredient_name: &str) -> Vec<MarketplaceLink> {
    let query = urlencoding::encode(ingredient_name);
    vec![
        MarketplaceLink {
            label: "Amazon Fresh".to_string(),
            url: format!("https://www.amazon.com/s?k={}&i=amazonfresh", query),
        },
        MarketplaceLink {
            label: "Walmart".to_string(),
            url: format!("https://www.walmart.com/search?q={}", query),
        },
        MarketplaceLink {
            label: "Instacart".to_string(),
            url: format!("https://www.instacart.com/store/s?k={}", query),
        },
    ]
}

/// Plain-text shopping list for the clipboard: the recipe name followed by
/// one line per missing ingredient.
pub fn shopping_list_text(recipe: &Recipe) -> String {
    let mut text = format!("[Shopping list]\nRecipe: {}\nNeeded:\n", recipe.recipe_name);
    for ingredient in recipe.missing_ingredients() {
        text.push_str(&format!("- {}\n", ingredient.name));
    }
    text
}

/// Grounded nearby-store search. Errors come back as a generic message for
/// the detail view's alert; prior results stay untouched on failure.
pub async fn find_nearby_stores(state: &AppState) -> Result<Vec<Store>, String> {
    state
        .store_locator_service
        .search_nearby()
        .await
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RecipeIngredient;

    #[test]
    fn test_marketplace_links_encode_the_query() {
        let links = marketplace_links("soy sauce");
        assert_eq!(links.len(), 3);
        for link in &links {
            assert!(link.url.contains("soy%20sauce"), "unencoded url: {}", link.url);
        }
    }

    #[test]
    fn test_shopping_list_contains_only_missing_ingredients() {
        let recipe = Recipe {
            recipe_name: "Fried Rice".to_string(),
            cuisine_type: None,
            description: "desc".to_string(),
            ingredients: vec![
                RecipeIngredient {
                    name: "rice".to_string(),
                    is_available: true,
                },
                RecipeIngredient {
                    name: "soy sauce".to_string(),
                    is_available: false,
                },
            ],
            steps: vec!["cook".to_string()],
            chef_tips: None,
            cooking_time: "15 minutes".to_string(),
            calories: None,
            image_url: None,
        };

        let text = shopping_list_text(&recipe);
        assert!(text.contains("Fried Rice"));
        assert!(text.contains("- soy sauce"));
        assert!(!text.contains("- rice"));
    }
}
