use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use utoipa::ToSchema;

use crate::model::ReviewSnippet;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    Completed,
    Other(String),
}

impl OrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Completed => "completed",
            OrderStatus::Other(raw) => raw,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, OrderStatus::Completed)
    }

    /// Anything that is not `completed`, including statuses this client does not know.
    pub fn is_active(&self) -> bool {
        !self.is_completed()
    }
}

impl From<&str> for OrderStatus {
    fn from(value: &str) -> Self {
        match value {
            "pending" => OrderStatus::Pending,
            "preparing" => OrderStatus::Preparing,
            "ready" => OrderStatus::Ready,
            "completed" => OrderStatus::Completed,
            other => OrderStatus::Other(other.to_string()),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for OrderStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for OrderStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(OrderStatus::from(raw.as_str()))
    }
}

/// Price as it arrives on the wire: the backend sends a float, older rows a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, ToSchema)]
#[serde(untagged)]
pub enum PriceValue {
    Number(f64),
    Text(String),
    #[default]
    Null,
}

impl PriceValue {
    /// Coerces like JavaScript's `Number(value)`. The result may be NaN or infinite.
    pub fn coerce(&self) -> f64 {
        match self {
            PriceValue::Number(n) => *n,
            PriceValue::Text(text) => coerce_numeric_text(text),
            PriceValue::Null => 0.0,
        }
    }

    pub fn finite(&self) -> Option<f64> {
        let value = self.coerce();
        value.is_finite().then_some(value)
    }
}

impl From<f64> for PriceValue {
    fn from(value: f64) -> Self {
        PriceValue::Number(value)
    }
}

fn coerce_numeric_text(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let radix = match trimmed.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };

    if let Some(radix) = radix {
        return u64::from_str_radix(&trimmed[2..], radix)
            .map(|v| v as f64)
            .unwrap_or(f64::NAN);
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    // Rust accepts spellings JavaScript rejects ("inf", "nan"); only digits are numbers here.
    if trimmed
        .chars()
        .any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E')
    {
        return f64::NAN;
    }

    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub id: i64,
    pub maker_id: i64,
    #[serde(default)]
    pub eater_id: Option<i64>,
    pub order_code: String,
    #[serde(default)]
    pub eater_name: String,
    #[serde(default)]
    pub meal_name: String,
    #[serde(default)]
    pub image_data: String,
    #[serde(default)]
    #[schema(value_type = f64)]
    pub price: PriceValue,
    #[serde(default)]
    pub order_time: Option<String>,
    #[schema(value_type = String, example = "pending")]
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review: Option<ReviewSnippet>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateOrder {
    pub maker_id: i64,
    pub order_code: String,
    pub eater_name: String,
    pub eater_id: Option<i64>,
    pub meal_name: String,
    pub image_data: String,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateOrderStatus {
    #[schema(value_type = String, example = "completed")]
    pub status: OrderStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderTab {
    #[default]
    Active,
    Completed,
}

impl OrderTab {
    pub fn matches(&self, order: &Order) -> bool {
        match self {
            OrderTab::Active => order.status.is_active(),
            OrderTab::Completed => order.status.is_completed(),
        }
    }

    pub fn filter<'a>(&self, orders: &'a [Order]) -> Vec<&'a Order> {
        orders.iter().filter(|order| self.matches(order)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order_with_status(id: i64, status: &str) -> Order {
        serde_json::from_value(json!({
            "id": id,
            "maker_id": 1,
            "order_code": format!("CODE{id}"),
            "price": 10.0,
            "order_time": "2025-03-01T09:00:00Z",
            "status": status,
        }))
        .unwrap()
    }

    #[test]
    fn status_roundtrips_known_and_unknown_values() {
        assert_eq!(OrderStatus::from("ready"), OrderStatus::Ready);
        let unknown = OrderStatus::from("cancelled");
        assert_eq!(unknown, OrderStatus::Other("cancelled".into()));
        assert!(unknown.is_active());
        assert_eq!(serde_json::to_value(&unknown).unwrap(), json!("cancelled"));
    }

    #[test]
    fn price_accepts_number_string_and_null() {
        let order: Order = serde_json::from_value(json!({
            "id": 1, "maker_id": 2, "order_code": "A", "status": "completed", "price": "12.50"
        }))
        .unwrap();
        assert_eq!(order.price.finite(), Some(12.5));

        assert_eq!(PriceValue::Number(7.0).finite(), Some(7.0));
        assert_eq!(PriceValue::Null.finite(), Some(0.0));
        assert_eq!(PriceValue::Text("  ".into()).finite(), Some(0.0));
        assert_eq!(PriceValue::Text("0x10".into()).finite(), Some(16.0));
        assert_eq!(PriceValue::Text("1e2".into()).finite(), Some(100.0));
    }

    #[test]
    fn price_rejects_non_numeric_text() {
        assert_eq!(PriceValue::Text("abc".into()).finite(), None);
        assert_eq!(PriceValue::Text("inf".into()).finite(), None);
        assert_eq!(PriceValue::Text("Infinity".into()).finite(), None);
        assert_eq!(PriceValue::Text("12.5.1".into()).finite(), None);
    }

    #[test]
    fn tabs_split_orders_by_completion() {
        let orders = vec![
            order_with_status(1, "pending"),
            order_with_status(2, "completed"),
            order_with_status(3, "ready"),
            order_with_status(4, "preparing"),
        ];

        let active: Vec<i64> = OrderTab::Active.filter(&orders).iter().map(|o| o.id).collect();
        let done: Vec<i64> = OrderTab::Completed
            .filter(&orders)
            .iter()
            .map(|o| o.id)
            .collect();

        assert_eq!(active, vec![1, 3, 4]);
        assert_eq!(done, vec![2]);
    }
}
