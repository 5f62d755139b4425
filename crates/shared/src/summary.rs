use chrono::{DateTime, Duration, Local, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::Order;
use crate::utils::parse_optional_order_timestamp;

/// A maker's figures for the current local day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub revenue_today: f64,
    pub completed_today: u32,
    pub active_orders: u32,
}

/// Summarizes `orders` against today in the host's local time zone.
pub fn summarize(orders: &[Order]) -> OrderSummary {
    summarize_at(orders, Local::now())
}

/// Summarizes `orders` against the local day that contains `now`.
///
/// Non-completed orders only count as active. Completed orders count towards
/// revenue when their timestamp parses, falls in `[midnight, next midnight)`
/// and their price is finite; anything else is dropped without error.
pub fn summarize_at<Tz: TimeZone>(orders: &[Order], now: DateTime<Tz>) -> OrderSummary {
    let (start, end) = day_bounds(&now);
    let mut summary = OrderSummary::default();

    for order in orders {
        if order.status.is_active() {
            summary.active_orders += 1;
            continue;
        }

        let Some(placed_at) = parse_optional_order_timestamp(order.order_time.as_deref()) else {
            continue;
        };

        if placed_at < start || placed_at >= end {
            continue;
        }

        let Some(price) = order.price.finite() else {
            continue;
        };

        summary.revenue_today += price;
        summary.completed_today += 1;
    }

    summary
}

fn day_bounds<Tz: TimeZone>(now: &DateTime<Tz>) -> (DateTime<Utc>, DateTime<Utc>) {
    let tz = now.timezone();
    let today = now.date_naive();
    let start = local_midnight(&tz, today);
    let end = today
        .succ_opt()
        .map(|tomorrow| local_midnight(&tz, tomorrow))
        .unwrap_or(start + Duration::hours(24));

    (start, end)
}

// A zone may skip midnight entirely; the day then starts at the first valid
// instant after it.
fn local_midnight<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> DateTime<Utc> {
    let naive = date.and_time(NaiveTime::MIN);

    (0..=2)
        .find_map(|hours| {
            tz.from_local_datetime(&(naive + Duration::hours(hours)))
                .earliest()
        })
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderStatus, PriceValue};
    use chrono::FixedOffset;

    fn order(status: &str, price: PriceValue, order_time: Option<&str>) -> Order {
        Order {
            id: 1,
            maker_id: 1,
            eater_id: None,
            order_code: "482913K7QZ".into(),
            eater_name: "sam".into(),
            meal_name: "Laksa".into(),
            image_data: String::new(),
            price,
            order_time: order_time.map(str::to_string),
            status: OrderStatus::from(status),
            review: None,
        }
    }

    fn utc_noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn counts_today_completed_and_active() {
        let orders = vec![
            order("completed", 10.0.into(), Some("2025-03-01T09:00:00Z")),
            order("completed", 5.0.into(), Some("2025-02-28T09:00:00Z")),
            order("pending", 7.0.into(), Some("2025-03-01T10:00:00")),
        ];

        let summary = summarize_at(&orders, utc_noon());

        assert_eq!(
            summary,
            OrderSummary {
                revenue_today: 10.0,
                completed_today: 1,
                active_orders: 1,
            }
        );
    }

    #[test]
    fn empty_list_is_all_zero() {
        assert_eq!(summarize_at(&[], utc_noon()), OrderSummary::default());
        assert_eq!(summarize(&[]), OrderSummary::default());
    }

    #[test]
    fn string_price_is_coerced() {
        let orders = vec![order(
            "completed",
            PriceValue::Text("12.50".into()),
            Some("2025-03-01 08:15:00"),
        )];

        let summary = summarize_at(&orders, utc_noon());
        assert_eq!(summary.revenue_today, 12.5);
        assert_eq!(summary.completed_today, 1);
    }

    #[test]
    fn unparseable_timestamp_is_dropped() {
        let orders = vec![
            order("completed", 9.0.into(), Some("not-a-date")),
            order("completed", 9.0.into(), None),
        ];

        assert_eq!(summarize_at(&orders, utc_noon()), OrderSummary::default());
    }

    #[test]
    fn non_finite_price_is_dropped() {
        let orders = vec![
            order("completed", PriceValue::Text("free".into()), Some("2025-03-01T09:00:00Z")),
            order("completed", 4.0.into(), Some("2025-03-01T09:00:00Z")),
        ];

        let summary = summarize_at(&orders, utc_noon());
        assert_eq!(summary.revenue_today, 4.0);
        assert_eq!(summary.completed_today, 1);
    }

    #[test]
    fn every_non_completed_status_is_active() {
        let orders: Vec<Order> = ["pending", "preparing", "ready", "cancelled", ""]
            .into_iter()
            .map(|status| order(status, PriceValue::Null, Some("garbage")))
            .collect();

        let summary = summarize_at(&orders, utc_noon());
        assert_eq!(summary.active_orders, 5);
        assert_eq!(summary.completed_today, 0);
        assert_eq!(summary.revenue_today, 0.0);
    }

    #[test]
    fn window_is_half_open() {
        let orders = vec![
            order("completed", 1.0.into(), Some("2025-03-01T00:00:00Z")),
            order("completed", 2.0.into(), Some("2025-03-01T23:59:59.999Z")),
            order("completed", 4.0.into(), Some("2025-03-02T00:00:00Z")),
        ];

        let summary = summarize_at(&orders, utc_noon());
        assert_eq!(summary.revenue_today, 3.0);
        assert_eq!(summary.completed_today, 2);
    }

    #[test]
    fn window_follows_local_day_while_zone_less_times_are_utc() {
        let melbourne = FixedOffset::east_opt(11 * 3600).unwrap();
        let now = melbourne.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();

        // Local day runs 2025-02-28T13:00Z .. 2025-03-01T13:00Z.
        let orders = vec![
            order("completed", 1.0.into(), Some("2025-02-28 14:00:00")),
            order("completed", 2.0.into(), Some("2025-03-01 12:59:00")),
            order("completed", 4.0.into(), Some("2025-03-01 13:00:00")),
            order("completed", 8.0.into(), Some("2025-03-01T20:00:00+11:00")),
        ];

        let summary = summarize_at(&orders, now);
        assert_eq!(summary.revenue_today, 11.0);
        assert_eq!(summary.completed_today, 3);
    }

    #[test]
    fn rerunning_gives_the_same_result() {
        let orders = vec![
            order("completed", 3.5.into(), Some("2025-03-01T09:00:00Z")),
            order("ready", 2.0.into(), None),
        ];

        let first = summarize_at(&orders, utc_noon());
        let second = summarize_at(&orders, utc_noon());
        assert_eq!(first, second);
    }

    #[test]
    fn serializes_in_camel_case() {
        let value = serde_json::to_value(OrderSummary {
            revenue_today: 1.5,
            completed_today: 1,
            active_orders: 2,
        })
        .unwrap();

        assert_eq!(
            value,
            serde_json::json!({"revenueToday": 1.5, "completedToday": 1, "activeOrders": 2})
        );
    }
}
