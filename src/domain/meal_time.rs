use serde::{Deserialize, Serialize};

/// The meal a generation request is scoped to.
/// Exactly one value is active per request; the AI service treats it as an
/// opaque parameter embedded in the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealTime {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealTime {
    /// All meal times, in day order. Used by pickers at the UI boundary.
    pub fn all() -> [MealTime; 3] {
        [MealTime::Breakfast, MealTime::Lunch, MealTime::Dinner]
    }
}

impl std::fmt::Display for MealTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MealTime::Breakfast => write!(f, "breakfast"),
            MealTime::Lunch => write!(f, "lunch"),
            MealTime::Dinner => write!(f, "dinner"),
        }
    }
}
