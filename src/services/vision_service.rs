// src/services/vision_service.rs
//
// Fridge photo scanning: send the captured image to the AI service and
// merge the recognized names into the ingredient list.

use std::sync::Arc;

use crate::error::AppResult;
use crate::events::{EventBus, IngredientsRecognized};
use crate::integrations::GenerativeClient;
use crate::services::IngredientService;

pub struct VisionService {
    client: Arc<dyn GenerativeClient>,
    ingredients: Arc<IngredientService>,
    event_bus: Arc<EventBus>,
}

impl VisionService {
    pub fn new(
        client: Arc<dyn GenerativeClient>,
        ingredients: Arc<IngredientService>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            client,
            ingredients,
            event_bus,
        }
    }

    /// Recognize ingredients in a photo and merge them into the list.
    ///
    /// The adapter returns names unfiltered and undeduplicated; the merge
    /// itself deduplicates against the existing list. On failure nothing is
    /// added and the single generic analysis error propagates.
    ///
    /// Returns the number of ingredients actually added.
    pub async fn scan_and_merge(&self, image: &[u8], mime_type: &str) -> AppResult<usize> {
        let names = self.client.identify_ingredients(image, mime_type).await?;

        let added = self.ingredients.add_many(&names);
        log::info!("Photo scan: {} recognized, {} new", names.len(), added);

        self.event_bus
            .emit(IngredientsRecognized::new(names.len(), added));

        Ok(added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::events::create_event_bus;
    use crate::integrations::MockGenerativeClient;

    fn service(client: MockGenerativeClient) -> (VisionService, Arc<IngredientService>) {
        let ingredients = Arc::new(IngredientService::new());
        let service = VisionService::new(
            Arc::new(client),
            Arc::clone(&ingredients),
            create_event_bus(),
        );
        (service, ingredients)
    }

    #[tokio::test]
    async fn test_scan_merges_against_existing_list() {
        let mut client = MockGenerativeClient::new();
        client.expect_identify_ingredients().returning(|_, _| {
            Ok(vec![
                "egg".to_string(),
                "milk".to_string(),
                "egg".to_string(),
            ])
        });

        let (service, ingredients) = service(client);
        ingredients.add("milk");

        let added = service.scan_and_merge(b"jpeg-bytes", "image/jpeg").await.unwrap();

        assert_eq!(added, 1);
        assert_eq!(ingredients.list(), vec!["milk", "egg"]);
    }

    #[tokio::test]
    async fn test_scan_failure_adds_nothing() {
        let mut client = MockGenerativeClient::new();
        client
            .expect_identify_ingredients()
            .returning(|_, _| Err(AppError::ImageAnalysis("malformed JSON".to_string())));

        let (service, ingredients) = service(client);

        let result = service.scan_and_merge(b"jpeg-bytes", "image/jpeg").await;

        assert!(matches!(result, Err(AppError::ImageAnalysis(_))));
        assert!(ingredients.is_empty());
    }
}
