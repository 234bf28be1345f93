use serde::{Deserialize, Serialize};

/// A nearby grocery store returned by the grounded search.
/// Ephemeral: never persisted, replaced wholesale on each search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    pub name: String,
    pub uri: String,
    pub address: Option<String>,
}
