// src/services/store_locator_service.rs
//
// Nearby-store search: one position fix, one grounded AI call, a small
// deduplicated result list. Results are ephemeral and replaced wholesale
// on every search; nothing here persists.

use std::sync::{Arc, Mutex};

use crate::domain::Store;
use crate::error::AppResult;
use crate::events::{EventBus, StoresFound};
use crate::integrations::{GenerativeClient, LocationProvider};

/// Results are capped at this many stores, first occurrences winning.
const MAX_RESULTS: usize = 5;

pub struct StoreLocatorService {
    client: Arc<dyn GenerativeClient>,
    location: Arc<dyn LocationProvider>,
    event_bus: Arc<EventBus>,
    results: Mutex<Vec<Store>>,
}

impl StoreLocatorService {
    pub fn new(
        client: Arc<dyn GenerativeClient>,
        location: Arc<dyn LocationProvider>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            client,
            location,
            event_bus,
            results: Mutex::new(Vec::new()),
        }
    }

    /// Search for grocery stores near the device.
    ///
    /// Location failure (permission denied, unavailable) and search failure
    /// both propagate as-is, leaving the previous results untouched; the
    /// caller shows a generic alert and re-enables the control. On success
    /// the result list is replaced wholesale: deduplicated by name (first
    /// occurrence wins) and capped at five.
    pub async fn search_nearby(&self) -> AppResult<Vec<Store>> {
        let position = self.location.current_position().await?;

        let raw = self
            .client
            .search_nearby_stores(position.latitude, position.longitude)
            .await?;

        let mut stores: Vec<Store> = Vec::new();
        for store in raw {
            if stores.len() == MAX_RESULTS {
                break;
            }
            if stores.iter().any(|existing| existing.name == store.name) {
                continue;
            }
            stores.push(store);
        }

        log::info!("Nearby search produced {} stores", stores.len());
        *self.results.lock().unwrap() = stores.clone();
        self.event_bus.emit(StoresFound::new(stores.len()));

        Ok(stores)
    }

    /// The most recent search results.
    pub fn results(&self) -> Vec<Store> {
        self.results.lock().unwrap().clone()
    }
}
