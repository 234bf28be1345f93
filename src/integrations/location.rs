// src/integrations/location.rs
//
// Platform geolocation, modeled as an explicit one-shot async operation
// instead of a nested callback. The platform may decline (permission) or
// fail (unavailable); both surface as a single generic location error and
// are never retried.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;

/// Device coordinates from the platform's location service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// One-shot position query.
    ///
    /// Errors map to `AppError::Location` (permission denied, service
    /// unavailable, timeout inside the platform).
    async fn current_position(&self) -> AppResult<Coordinates>;
}

/// Provider for shells that resolve geolocation on the UI side and inject
/// the fix before a search (the webview owns the permission prompt).
pub struct StaticLocationProvider {
    coordinates: Coordinates,
}

impl StaticLocationProvider {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            coordinates: Coordinates {
                latitude,
                longitude,
            },
        }
    }
}

#[async_trait]
impl LocationProvider for StaticLocationProvider {
    async fn current_position(&self) -> AppResult<Coordinates> {
        Ok(self.coordinates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_provider_returns_its_fix() {
        let provider = StaticLocationProvider::new(37.5665, 126.9780);
        let pos = provider.current_position().await.unwrap();
        assert_eq!(pos.latitude, 37.5665);
        assert_eq!(pos.longitude, 126.9780);
    }
}
