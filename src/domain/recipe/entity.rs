use serde::{Deserialize, Serialize};

/// One ingredient line inside a recipe, as classified by the AI service.
///
/// `is_available = true` means the service judged it already present among
/// the user's supplied ingredients; `false` means it must be acquired.
/// The client never re-derives this partition locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredient {
    pub name: String,
    pub is_available: bool,
}

/// A generated recipe suggestion.
///
/// Identity for deduplication and saving is `recipe_name` (exact string
/// match); there is no opaque ID. `image_url` stays `None` until image
/// synthesis completes for this recipe — its absence is a valid, renderable
/// state ("still generating" or "no photo available").
///
/// Field names follow the AI service's JSON contract (camelCase).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub recipe_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine_type: Option<String>,

    pub description: String,

    pub ingredients: Vec<RecipeIngredient>,

    pub steps: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chef_tips: Option<Vec<String>>,

    pub cooking_time: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Recipe {
    /// Ingredients the user still needs to buy.
    pub fn missing_ingredients(&self) -> impl Iterator<Item = &RecipeIngredient> {
        self.ingredients.iter().filter(|ing| !ing.is_available)
    }

    /// Ingredients the user already has.
    pub fn available_ingredients(&self) -> impl Iterator<Item = &RecipeIngredient> {
        self.ingredients.iter().filter(|ing| ing.is_available)
    }
}
