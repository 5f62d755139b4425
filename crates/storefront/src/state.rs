use crate::{
    abstract_trait::DynSessionStore,
    cache::{InFlightGuard, MemorySessionStore, SessionStore},
    config::{Config, SessionBackend},
    di::DependenciesInject,
    middleware::session::SessionManager,
};
use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::DynJwtService,
    config::{JwtConfig, RedisClient},
    utils::{Metrics, SystemMetrics, run_metrics_collector},
};
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub jwt_config: DynJwtService,
    pub sessions: SessionManager,
    pub in_flight: InFlightGuard,
    pub registry: Arc<Mutex<Registry>>,
    pub system_metrics: Arc<SystemMetrics>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .field("jwt_config", &"<dyn JwtService>")
            .field("sessions", &"<SessionManager>")
            .finish()
    }
}

impl AppState {
    /// Connects the configured session store and starts the system metrics collector.
    pub async fn new(config: &Config) -> Result<Self> {
        let session_store: DynSessionStore = match config.session_backend {
            SessionBackend::Redis => {
                let redis =
                    RedisClient::new(&config.redis).context("Failed to connect to Redis")?;
                redis.ping().await.context("Failed to ping Redis server")?;
                Arc::new(SessionStore::new(redis.pool))
            }
            SessionBackend::Memory => {
                info!("Keeping sessions in memory");
                Arc::new(MemorySessionStore::new())
            }
        };

        let state = Self::build(config, session_store)?;

        tokio::spawn(run_metrics_collector(state.system_metrics.clone()));

        Ok(state)
    }

    pub fn build(config: &Config, session_store: DynSessionStore) -> Result<Self> {
        let jwt_config = Arc::new(
            JwtConfig::new(&config.jwt_secret).with_access_ttl(config.token_ttl),
        ) as DynJwtService;

        let metrics = Metrics::new();
        let system_metrics = Arc::new(SystemMetrics::new());

        let mut registry = Registry::default();
        metrics.register(&mut registry);
        system_metrics.register(&mut registry);

        let di_container = DependenciesInject::new(config, metrics)
            .context("Failed to initialize dependency injection container")?;

        Ok(Self {
            di_container,
            jwt_config,
            sessions: SessionManager::new(session_store, config.session_ttl),
            in_flight: InFlightGuard::new(),
            registry: Arc::new(Mutex::new(registry)),
            system_metrics,
        })
    }
}
