use std::{collections::HashMap, sync::Arc, time::Duration};

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    session::{entities::RecipeSession, ports::SessionRepository},
};

/// Process-local session store, bounded in size and age.
#[derive(Debug, Clone)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<HashMap<Uuid, RecipeSession>>>,
    max_sessions: usize,
    ttl: Duration,
}

impl InMemorySessionRepository {
    pub fn new(max_sessions: usize, ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            max_sessions: max_sessions.max(1),
            ttl,
        }
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    fn evict(&self, sessions: &mut HashMap<Uuid, RecipeSession>) {
        let now = Utc::now();
        sessions.retain(|_, session| !session.is_expired(self.ttl, now));

        while sessions.len() >= self.max_sessions {
            let oldest = sessions
                .values()
                .min_by_key(|session| session.updated_at)
                .map(|session| session.id);

            match oldest {
                Some(id) => {
                    tracing::debug!(session_id = %id, "evicting oldest session");
                    sessions.remove(&id);
                }
                None => break,
            }
        }
    }
}

impl SessionRepository for InMemorySessionRepository {
    async fn create_session(&self, session: RecipeSession) -> Result<RecipeSession, CoreError> {
        let mut sessions = self.sessions.write().await;
        self.evict(&mut sessions);
        sessions.insert(session.id, session.clone());

        Ok(session)
    }

    async fn get_by_id(&self, session_id: Uuid) -> Result<Option<RecipeSession>, CoreError> {
        let sessions = self.sessions.read().await;

        Ok(sessions
            .get(&session_id)
            .filter(|session| !session.is_expired(self.ttl, Utc::now()))
            .cloned())
    }

    async fn update_session_with<T, F>(&self, session_id: Uuid, update: F) -> Result<T, CoreError>
    where
        T: Send,
        F: FnOnce(&mut RecipeSession) -> Result<T, CoreError> + Send,
    {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(&session_id)
            .filter(|session| !session.is_expired(self.ttl, Utc::now()))
            .ok_or(CoreError::NotFound)?;

        update(session)
    }

    async fn delete_session(&self, session_id: Uuid) -> Result<(), CoreError> {
        let mut sessions = self.sessions.write().await;

        match sessions.remove(&session_id) {
            Some(session) if !session.is_expired(self.ttl, Utc::now()) => Ok(()),
            _ => Err(CoreError::NotFound),
        }
    }
}
