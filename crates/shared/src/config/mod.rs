mod jwt;
mod redis;

pub use self::jwt::{Claims, JwtConfig};
pub use self::redis::{RedisClient, RedisConfig};
