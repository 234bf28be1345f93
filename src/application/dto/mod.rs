// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations
// - DTOs are simple, serializable structs
// - Conversion FROM domain/service types only (never TO)

use serde::{Deserialize, Serialize};

use crate::services::{GenerationPhase, GenerationSnapshot};

/// Observable pipeline state for the recipe grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationStateDto {
    pub phase: String,
    pub recipes: Vec<crate::domain::Recipe>,
    pub error: Option<String>,
    pub busy: bool,
}

impl From<GenerationSnapshot> for GenerationStateDto {
    fn from(snapshot: GenerationSnapshot) -> Self {
        let phase = match snapshot.phase {
            GenerationPhase::Idle => "idle",
            GenerationPhase::GeneratingText => "generating_text",
            GenerationPhase::GeneratingImages => "generating_images",
            GenerationPhase::Done => "done",
            GenerationPhase::Error => "error",
        };
        Self {
            phase: phase.to_string(),
            busy: snapshot.phase.is_busy(),
            recipes: snapshot.recipes,
            error: snapshot.error,
        }
    }
}

/// One external marketplace search link for a missing ingredient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketplaceLink {
    pub label: String,
    pub url: String,
}
