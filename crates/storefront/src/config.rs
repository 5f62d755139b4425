use anyhow::{Context, Result, anyhow};
use shared::config::RedisConfig;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionBackend {
    Redis,
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub jwt_secret: String,
    pub api_base_url: String,
    pub backend_timeout: Duration,
    pub view_deadline: Duration,
    pub session_backend: SessionBackend,
    pub session_ttl: chrono::Duration,
    /// Absolute lifetime of the login token. Idle expiry is left to the session.
    pub token_ttl: chrono::Duration,
    pub redis: RedisConfig,
    pub otel_endpoint: String,
}

impl Config {
    /// Defaults for everything that is optional in the environment.
    pub fn new(port: u16, jwt_secret: &str, api_base_url: &str) -> Self {
        Self {
            port,
            jwt_secret: jwt_secret.to_string(),
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            backend_timeout: Duration::from_secs(10),
            view_deadline: Duration::from_secs(15),
            session_backend: SessionBackend::Redis,
            session_ttl: chrono::Duration::minutes(30),
            token_ttl: chrono::Duration::hours(12),
            redis: RedisConfig::new("redis".into(), 6379, 0, None),
            otel_endpoint: "http://otel-collector:4317".to_string(),
        }
    }

    pub fn init() -> Result<Self> {
        let port = std::env::var("PORT")
            .context("Missing environment variable: PORT")?
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;
        let jwt_secret =
            std::env::var("JWT_SECRET").context("Missing environment variable: JWT_SECRET")?;
        let api_base_url =
            std::env::var("API_BASE_URL").context("Missing environment variable: API_BASE_URL")?;

        let mut config = Self::new(port, &jwt_secret, &api_base_url);

        if let Some(secs) = optional_parsed::<u64>("BACKEND_TIMEOUT_SECS")? {
            config.backend_timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = optional_parsed::<u64>("VIEW_DEADLINE_SECS")? {
            config.view_deadline = Duration::from_secs(secs);
        }
        if let Some(minutes) = optional_parsed::<i64>("SESSION_TTL_MINUTES")? {
            config.session_ttl = session_ttl_from_minutes(minutes)?;
        }
        if let Some(hours) = optional_parsed::<i64>("TOKEN_TTL_HOURS")? {
            config.token_ttl = token_ttl_from_hours(hours)?;
        }
        if config.token_ttl < config.session_ttl {
            return Err(anyhow!(
                "TOKEN_TTL_HOURS must cover at least one SESSION_TTL_MINUTES period"
            ));
        }

        config.session_backend = match std::env::var("SESSION_STORE").ok().as_deref() {
            None | Some("redis") => SessionBackend::Redis,
            Some("memory") => SessionBackend::Memory,
            Some(other) => {
                return Err(anyhow!(
                    "SESSION_STORE must be 'redis' or 'memory', got '{}'",
                    other
                ));
            }
        };

        if let Ok(host) = std::env::var("REDIS_HOST") {
            config.redis.host = host;
        }
        if let Some(port) = optional_parsed::<u16>("REDIS_PORT")? {
            config.redis.port = port;
        }
        if let Some(db) = optional_parsed::<u8>("REDIS_DB")? {
            config.redis.db = db;
        }
        config.redis.password = std::env::var("REDIS_PASSWORD")
            .ok()
            .filter(|pw| !pw.is_empty());

        if let Ok(endpoint) = std::env::var("OTEL_ENDPOINT") {
            config.otel_endpoint = endpoint;
        }

        Ok(config)
    }
}

fn session_ttl_from_minutes(minutes: i64) -> Result<chrono::Duration> {
    if minutes < 1 {
        return Err(anyhow!(
            "SESSION_TTL_MINUTES must be at least 1, got {}",
            minutes
        ));
    }
    Ok(chrono::Duration::minutes(minutes))
}

fn token_ttl_from_hours(hours: i64) -> Result<chrono::Duration> {
    if hours < 1 {
        return Err(anyhow!("TOKEN_TTL_HOURS must be at least 1, got {}", hours));
    }
    Ok(chrono::Duration::hours(hours))
}

fn optional_parsed<T>(name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("{name} has an invalid value: '{raw}'")),
        Err(_) => Ok(None),
    }
}
