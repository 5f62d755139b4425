use crate::abstract_trait::SessionStoreTrait;
use async_trait::async_trait;
use chrono::Duration;
use deadpool_redis::{
    Connection, Pool,
    redis::{self, AsyncCommands},
};
use shared::model::Session;
use std::{collections::HashMap, sync::Arc};
use tokio::{sync::RwLock, time::Instant};
use tracing::{debug, error};

#[derive(Clone)]
pub struct SessionStore {
    pool: Pool,
}

impl SessionStore {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    async fn get_conn(&self) -> Option<Connection> {
        match self.pool.get().await {
            Ok(conn) => Some(conn),
            Err(e) => {
                error!("Failed to get Redis connection: {:?}", e);
                None
            }
        }
    }
}

#[async_trait]
impl SessionStoreTrait for SessionStore {
    async fn create_session(&self, session_id: &str, session: &Session, ttl: Duration) -> bool {
        let json_data = match serde_json::to_string(session) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize session: {:?}", e);
                return false;
            }
        };

        let Some(mut conn) = self.get_conn().await else {
            return false;
        };

        let result: redis::RedisResult<()> = redis::pipe()
            .cmd("SET")
            .arg(session_id)
            .arg(&json_data)
            .ignore()
            .cmd("EXPIRE")
            .arg(session_id)
            .arg(ttl.num_seconds())
            .ignore()
            .query_async(&mut conn)
            .await;

        match result {
            Ok(_) => {
                debug!("Session created for session_id: {}", session_id);
                true
            }
            Err(e) => {
                error!("Failed to create session: {:?}", e);
                false
            }
        }
    }

    async fn get_session(&self, session_id: &str) -> Option<Session> {
        let mut conn = self.get_conn().await?;
        let result: redis::RedisResult<Option<String>> = conn.get(session_id).await;

        match result {
            Ok(Some(data)) => match serde_json::from_str::<Session>(&data) {
                Ok(session) => {
                    debug!("Session retrieved for session_id: {}", session_id);
                    Some(session)
                }
                Err(e) => {
                    error!("Failed to deserialize session: {:?}", e);
                    None
                }
            },
            Ok(None) => {
                debug!("Session not found: {}", session_id);
                None
            }
            Err(e) => {
                error!("Redis get error for session {}: {:?}", session_id, e);
                None
            }
        }
    }

    async fn delete_session(&self, session_id: &str) -> bool {
        let Some(mut conn) = self.get_conn().await else {
            return false;
        };

        match redis::cmd("DEL")
            .arg(session_id)
            .query_async::<()>(&mut conn)
            .await
        {
            Ok(()) => {
                debug!("Session deleted: {}", session_id);
                true
            }
            Err(e) => {
                error!("Failed to delete session {}: {:?}", session_id, e);
                false
            }
        }
    }

    async fn refresh_session(&self, session_id: &str, ttl: Duration) -> bool {
        let Some(mut conn) = self.get_conn().await else {
            return false;
        };

        // EXPIRE answers 0 when the key is already gone.
        match redis::cmd("EXPIRE")
            .arg(session_id)
            .arg(ttl.num_seconds())
            .query_async::<i64>(&mut conn)
            .await
        {
            Ok(1) => {
                debug!("Session TTL refreshed for session_id: {}", session_id);
                true
            }
            Ok(_) => false,
            Err(e) => {
                error!("Failed to refresh session TTL {}: {:?}", session_id, e);
                false
            }
        }
    }
}

/// Process-local session store for development and tests.
#[derive(Clone, Default)]
pub struct MemorySessionStore {
    entries: Arc<RwLock<HashMap<String, (Session, Instant)>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn expiry(ttl: Duration) -> Instant {
        Instant::now() + ttl.to_std().unwrap_or_default()
    }
}

#[async_trait]
impl SessionStoreTrait for MemorySessionStore {
    async fn create_session(&self, session_id: &str, session: &Session, ttl: Duration) -> bool {
        let mut entries = self.entries.write().await;

        let now = Instant::now();
        entries.retain(|_, (_, expires_at)| *expires_at > now);

        entries.insert(session_id.to_string(), (session.clone(), Self::expiry(ttl)));
        debug!("Session created for session_id: {}", session_id);
        true
    }

    async fn get_session(&self, session_id: &str) -> Option<Session> {
        let mut entries = self.entries.write().await;

        match entries.get(session_id) {
            Some((session, expires_at)) if *expires_at > Instant::now() => Some(session.clone()),
            Some(_) => {
                entries.remove(session_id);
                debug!("Session expired: {}", session_id);
                None
            }
            None => None,
        }
    }

    async fn delete_session(&self, session_id: &str) -> bool {
        self.entries.write().await.remove(session_id).is_some()
    }

    async fn refresh_session(&self, session_id: &str, ttl: Duration) -> bool {
        let mut entries = self.entries.write().await;

        match entries.get_mut(session_id) {
            Some((_, expires_at)) if *expires_at > Instant::now() => {
                *expires_at = Self::expiry(ttl);
                true
            }
            _ => false,
        }
    }
}
