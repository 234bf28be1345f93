// src/integrations/mod.rs
//
// External collaborators.
//
// CRITICAL RULES:
// - This is INFRASTRUCTURE, not DOMAIN
// - Clients map external data to domain types, never mutate app state
// - All external API concerns (encoding, schemas, transport) live here

pub mod gemini;
pub mod location;

pub use gemini::{GeminiClient, GeminiConfig, GenerativeClient};
pub use location::{Coordinates, LocationProvider, StaticLocationProvider};

#[cfg(test)]
pub use gemini::MockGenerativeClient;
#[cfg(test)]
pub use location::MockLocationProvider;
