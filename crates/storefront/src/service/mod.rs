mod auth;
mod backend;
mod eater_view;
mod maker_view;
mod meal;
mod order;
mod profile;
mod review;
mod summary;

pub use self::auth::AuthClientService;
pub use self::backend::BackendClient;
pub use self::eater_view::EaterViewService;
pub use self::maker_view::MakerViewService;
pub use self::meal::MealClientService;
pub use self::order::OrderClientService;
pub use self::profile::ProfileClientService;
pub use self::review::ReviewClientService;
pub use self::summary::OrderSummaryService;

use shared::errors::ClientError;
use std::{future::Future, time::Duration};

/// Runs a view fetch under the view deadline. Expiry reads as a timeout and
/// drops the in-flight request.
pub async fn within_deadline<T, F>(deadline: Duration, fut: F) -> Result<T, ClientError>
where
    F: Future<Output = Result<T, ClientError>>,
{
    tokio::time::timeout(deadline, fut)
        .await
        .unwrap_or(Err(ClientError::Timeout))
}
