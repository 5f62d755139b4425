use crate::{abstract_trait::OrderClientTrait, service::BackendClient};
use async_trait::async_trait;
use reqwest::Method;
use shared::{
    errors::ClientError,
    model::{CreateOrder, Order, OrderStatus, UpdateOrderStatus},
};

#[derive(Clone)]
pub struct OrderClientService {
    backend: BackendClient,
}

impl OrderClientService {
    pub fn new(backend: BackendClient) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl OrderClientTrait for OrderClientService {
    async fn list_for_maker(&self, maker_id: i64) -> Result<Vec<Order>, ClientError> {
        self.backend
            .get(
                "ListMakerOrders",
                "/api/orders",
                &[("maker_id", maker_id.to_string())],
                "Unable to load orders",
            )
            .await
    }

    async fn list_for_eater(&self, eater_id: i64) -> Result<Vec<Order>, ClientError> {
        self.backend
            .get(
                "ListEaterOrders",
                "/api/eater/orders",
                &[("eater_id", eater_id.to_string())],
                "Unable to load your orders",
            )
            .await
    }

    async fn create_order(&self, input: &CreateOrder) -> Result<Order, ClientError> {
        self.backend
            .send_json(
                "CreateOrder",
                Method::POST,
                "/api/orders",
                input,
                "Unable to place order",
            )
            .await
    }

    async fn update_status(
        &self,
        order_id: i64,
        status: OrderStatus,
    ) -> Result<Order, ClientError> {
        self.backend
            .send_json(
                "UpdateOrderStatus",
                Method::PATCH,
                &format!("/api/orders/{order_id}"),
                &UpdateOrderStatus { status },
                "Unable to update order",
            )
            .await
    }
}
