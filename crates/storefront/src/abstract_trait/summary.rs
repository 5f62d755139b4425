use async_trait::async_trait;
use shared::{errors::ClientError, summary::OrderSummary};
use std::sync::Arc;

pub type DynOrderSummaryService = Arc<dyn OrderSummaryServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderSummaryServiceTrait {
    async fn summary_for_maker(&self, maker_id: i64) -> Result<OrderSummary, ClientError>;
}
