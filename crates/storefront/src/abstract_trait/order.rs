use async_trait::async_trait;
use shared::{
    errors::ClientError,
    model::{CreateOrder, Order, OrderStatus},
};
use std::sync::Arc;

pub type DynOrderClient = Arc<dyn OrderClientTrait + Send + Sync>;

#[async_trait]
pub trait OrderClientTrait {
    async fn list_for_maker(&self, maker_id: i64) -> Result<Vec<Order>, ClientError>;
    async fn list_for_eater(&self, eater_id: i64) -> Result<Vec<Order>, ClientError>;
    async fn create_order(&self, input: &CreateOrder) -> Result<Order, ClientError>;
    async fn update_status(&self, order_id: i64, status: OrderStatus)
    -> Result<Order, ClientError>;
}
