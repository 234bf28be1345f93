// src/integrations/gemini/wire.rs
//
// Wire types and response schemas for the generateContent REST endpoint.
// Field names mirror the service's camelCase JSON exactly.

use serde::Deserialize;
use serde_json::{json, Value};

// ============================================================================
// RESPONSE SHAPE
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    pub candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
    #[serde(rename = "groundingMetadata")]
    pub grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
pub struct Content {
    pub parts: Option<Vec<Part>>,
}

#[derive(Debug, Deserialize)]
pub struct Part {
    pub text: Option<String>,
    #[serde(rename = "inlineData")]
    pub inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
pub struct InlineData {
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Deserialize)]
pub struct GroundingMetadata {
    #[serde(rename = "groundingChunks")]
    pub grounding_chunks: Option<Vec<GroundingChunk>>,
}

#[derive(Debug, Deserialize)]
pub struct GroundingChunk {
    pub maps: Option<MapsChunk>,
}

/// A place attached by the mapping-grounding tool.
#[derive(Debug, Deserialize)]
pub struct MapsChunk {
    pub title: Option<String>,
    pub uri: Option<String>,
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// First text part of the first candidate, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.parts()?
            .iter()
            .find_map(|part| part.text.as_deref())
    }

    /// First inline image payload of the first candidate, if any.
    pub fn first_inline_image(&self) -> Option<&InlineData> {
        self.parts()?
            .iter()
            .find_map(|part| part.inline_data.as_ref())
    }

    /// Grounding chunks of the first candidate.
    pub fn grounding_chunks(&self) -> &[GroundingChunk] {
        self.candidates
            .as_deref()
            .and_then(|c| c.first())
            .and_then(|c| c.grounding_metadata.as_ref())
            .and_then(|m| m.grounding_chunks.as_deref())
            .unwrap_or(&[])
    }

    fn parts(&self) -> Option<&Vec<Part>> {
        self.candidates
            .as_ref()?
            .first()?
            .content
            .as_ref()?
            .parts
            .as_ref()
    }
}

// ============================================================================
// RESPONSE SCHEMAS
// ============================================================================

/// Schema constraining an ingredient-recognition reply to a JSON array of
/// name strings.
pub fn ingredient_list_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": { "type": "STRING" }
    })
}

/// Schema constraining a recipe-generation reply to an array of structured
/// recipe objects. `cuisineType`, `chefTips` and `calories` stay optional.
pub fn recipe_list_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "recipeName": { "type": "STRING" },
                "cuisineType": { "type": "STRING" },
                "description": { "type": "STRING" },
                "ingredients": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "name": { "type": "STRING" },
                            "isAvailable": { "type": "BOOLEAN" }
                        },
                        "required": ["name", "isAvailable"]
                    }
                },
                "steps": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" }
                },
                "chefTips": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" }
                },
                "cookingTime": { "type": "STRING" },
                "calories": { "type": "STRING" }
            },
            "required": ["recipeName", "description", "ingredients", "steps", "cookingTime"]
        }
    })
}
