use anyhow::{Context, Result};
use deadpool_redis::{Pool, Runtime};
use redis::Client;
use tracing::info;

#[derive(Debug, Clone)]
pub struct RedisConfig {
    pub host: String,
    pub port: u16,
    pub db: u8,
    pub password: Option<String>,
}

impl RedisConfig {
    pub fn new(host: String, port: u16, db: u8, password: Option<String>) -> Self {
        Self {
            host,
            port,
            db,
            password,
        }
    }

    pub fn url(&self) -> String {
        match &self.password {
            Some(pw) => format!("redis://:{}@{}:{}/{}", pw, self.host, self.port, self.db),
            None => format!("redis://{}:{}/{}", self.host, self.port, self.db),
        }
    }
}

#[derive(Clone)]
pub struct RedisClient {
    pub client: Client,
    pub pool: Pool,
}

impl RedisClient {
    pub fn new(config: &RedisConfig) -> Result<Self> {
        info!("Creating redis client for {}:{}", config.host, config.port);

        let url = config.url();
        let client = Client::open(url.as_str()).context("invalid redis url")?;
        let pool = deadpool_redis::Config::from_url(url)
            .create_pool(Some(Runtime::Tokio1))
            .context("failed to create redis pool")?;

        Ok(Self { client, pool })
    }

    pub async fn ping(&self) -> Result<()> {
        let mut conn = self
            .client
            .get_multiplexed_async_connection()
            .await
            .context("failed to open redis connection")?;

        info!("Pinging redis");

        let _: () = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .context("redis did not answer PING")?;

        info!("Pinged redis");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_includes_password_only_when_set() {
        let open = RedisConfig::new("redis".into(), 6379, 0, None);
        assert_eq!(open.url(), "redis://redis:6379/0");

        let locked = RedisConfig::new("redis".into(), 6380, 2, Some("pw".into()));
        assert_eq!(locked.url(), "redis://:pw@redis:6380/2");
    }
}
