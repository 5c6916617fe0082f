//! Fakes for the async ports, shared by unit tests.

use std::time::Duration;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::{entities::IngredientName, ports::IngredientExtractor, value_objects::DecodedImage},
    recipe::{entities::RecipeTemplate, ports::RecipeCatalogRepository},
    session::{entities::RecipeSession, ports::SessionRepository},
};
use crate::infrastructure::session::InMemorySessionRepository;

pub const PNG_BYTES: [u8; 12] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 13];

/// Extractor answering with a fixed result, optionally after a delay.
pub struct FakeExtractor {
    result: Result<Vec<IngredientName>, CoreError>,
    delay: Option<Duration>,
}

impl FakeExtractor {
    pub fn returning(ingredients: &[&str]) -> Self {
        Self {
            result: Ok(ingredients.iter().map(|s| s.to_string()).collect()),
            delay: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(CoreError::ExtractionFailed(message.to_string())),
            delay: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

impl IngredientExtractor for FakeExtractor {
    async fn extract(&self, _image: &DecodedImage) -> Result<Vec<IngredientName>, CoreError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.result.clone()
    }
}

pub struct FailingCatalog;

impl RecipeCatalogRepository for FailingCatalog {
    async fn list_templates(&self) -> Result<Vec<RecipeTemplate>, CoreError> {
        Err(CoreError::InternalServerError)
    }
}

/// In-memory store that yields to the scheduler before every call, so
/// concurrent requests interleave at each await point.
pub struct YieldingSessionRepository {
    pub inner: InMemorySessionRepository,
}

impl SessionRepository for YieldingSessionRepository {
    async fn create_session(&self, session: RecipeSession) -> Result<RecipeSession, CoreError> {
        tokio::task::yield_now().await;
        self.inner.create_session(session).await
    }

    async fn get_by_id(&self, session_id: Uuid) -> Result<Option<RecipeSession>, CoreError> {
        tokio::task::yield_now().await;
        self.inner.get_by_id(session_id).await
    }

    async fn update_session_with<T, F>(&self, session_id: Uuid, update: F) -> Result<T, CoreError>
    where
        T: Send,
        F: FnOnce(&mut RecipeSession) -> Result<T, CoreError> + Send,
    {
        tokio::task::yield_now().await;
        self.inner.update_session_with(session_id, update).await
    }

    async fn delete_session(&self, session_id: Uuid) -> Result<(), CoreError> {
        tokio::task::yield_now().await;
        self.inner.delete_session(session_id).await
    }
}
