use crate::{
    abstract_trait::{DynOrderClient, OrderSummaryServiceTrait},
    service::within_deadline,
};
use async_trait::async_trait;
use shared::{
    errors::ClientError,
    summary::{OrderSummary, summarize},
};
use std::time::Duration;
use tracing::info;

#[derive(Clone)]
pub struct OrderSummaryService {
    orders: DynOrderClient,
    deadline: Duration,
}

impl OrderSummaryService {
    pub fn new(orders: DynOrderClient, deadline: Duration) -> Self {
        Self { orders, deadline }
    }
}

#[async_trait]
impl OrderSummaryServiceTrait for OrderSummaryService {
    async fn summary_for_maker(&self, maker_id: i64) -> Result<OrderSummary, ClientError> {
        let orders = within_deadline(self.deadline, self.orders.list_for_maker(maker_id)).await?;
        let summary = summarize(&orders);

        info!(
            "Maker {maker_id}: {} completed today, {} active",
            summary.completed_today, summary.active_orders
        );

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstract_trait::OrderClientTrait;
    use shared::model::{CreateOrder, Order, OrderStatus};
    use std::sync::Arc;

    struct SlowOrders {
        delay: Duration,
        orders: Vec<Order>,
    }

    #[async_trait]
    impl OrderClientTrait for SlowOrders {
        async fn list_for_maker(&self, _maker_id: i64) -> Result<Vec<Order>, ClientError> {
            tokio::time::sleep(self.delay).await;
            Ok(self.orders.clone())
        }

        async fn list_for_eater(&self, _eater_id: i64) -> Result<Vec<Order>, ClientError> {
            Ok(Vec::new())
        }

        async fn create_order(&self, _input: &CreateOrder) -> Result<Order, ClientError> {
            Err(ClientError::Timeout)
        }

        async fn update_status(
            &self,
            _order_id: i64,
            _status: OrderStatus,
        ) -> Result<Order, ClientError> {
            Err(ClientError::Timeout)
        }
    }

    fn pending_order() -> Order {
        serde_json::from_value(serde_json::json!({
            "id": 1, "maker_id": 5, "order_code": "482913K7QZ", "status": "pending",
        }))
        .unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn summary_within_deadline_counts_orders() {
        let service = OrderSummaryService::new(
            Arc::new(SlowOrders {
                delay: Duration::from_secs(1),
                orders: vec![pending_order()],
            }),
            Duration::from_secs(5),
        );

        let summary = service.summary_for_maker(5).await.unwrap();
        assert_eq!(summary.active_orders, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn slow_backend_times_out() {
        let service = OrderSummaryService::new(
            Arc::new(SlowOrders {
                delay: Duration::from_secs(30),
                orders: vec![pending_order()],
            }),
            Duration::from_secs(5),
        );

        let err = service.summary_for_maker(5).await.unwrap_err();
        assert!(matches!(err, ClientError::Timeout));
    }
}
