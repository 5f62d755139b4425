mod auth;
mod client;
mod error;
mod http;

pub use self::auth::AuthError;
pub use self::client::{ClientError, extract_error_message};
pub use self::error::ErrorResponse;
pub use self::http::HttpError;
