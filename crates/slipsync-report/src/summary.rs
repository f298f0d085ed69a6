//! # Dashboard Summary Module
//!
//! The four stat-card figures at the top of the dashboard, derived fresh
//! from each feed snapshot.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   ┌───────────┐ ┌───────────┐ ┌───────────┐ ┌───────────┐               │
//! │   │ Orders    │ │ Revenue   │ │ Low stock │ │ SKUs      │               │
//! │   │ today     │ │ today     │ │ items     │ │ tracked   │               │
//! │   └─────┬─────┘ └─────┬─────┘ └─────┬─────┘ └─────┬─────┘               │
//! │         │             │             │             │                     │
//! │   filter_today   sum_revenue   count_low_stock   len()                  │
//! │         └─────────────┴──────┬──────┴─────────────┘                     │
//! │                              │                                          │
//! │                DashboardSummary::compute(orders, inventory, now)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use slipsync_core::money::Money;

use crate::feed::{InventoryEntry, OrderRecord};

// =============================================================================
// Aggregation Primitives
// =============================================================================

/// Orders placed on `reference`'s UTC calendar date.
///
/// Orders with a null or unparseable `placed_at` are excluded; "today" is
/// determined by calendar date only, never by time-of-day arithmetic.
pub fn filter_today<'a>(
    orders: &'a [OrderRecord],
    reference: DateTime<Utc>,
) -> Vec<&'a OrderRecord> {
    let today = reference.date_naive();
    orders
        .iter()
        .filter(|order| order.placed_on() == Some(today))
        .collect()
}

/// Σ normalized `total_amount` over the given orders, parse-or-zero.
pub fn sum_revenue<'a, I>(orders: I) -> Money
where
    I: IntoIterator<Item = &'a OrderRecord>,
{
    orders
        .into_iter()
        .map(|order| order.total_amount.normalize())
        .sum()
}

/// Count of inventory entries at or below their configured reorder point.
pub fn count_low_stock(inventory: &[InventoryEntry]) -> usize {
    inventory.iter().filter(|e| e.is_low_stock()).count()
}

// =============================================================================
// Dashboard Summary
// =============================================================================

/// The stat-card figures, derived in one pass per refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DashboardSummary {
    /// Orders placed today.
    pub today_orders: usize,
    /// Revenue placed today.
    pub today_revenue: Money,
    /// Inventory entries at or below their reorder point.
    pub low_stock_items: usize,
    /// Total SKUs tracked by the inventory feed.
    pub total_skus: usize,
}

impl DashboardSummary {
    /// Derives the summary from raw feed snapshots.
    ///
    /// Pure: re-invoked wholesale on every refresh, no state carried over.
    pub fn compute(
        orders: &[OrderRecord],
        inventory: &[InventoryEntry],
        now: DateTime<Utc>,
    ) -> Self {
        let todays = filter_today(orders, now);
        let summary = DashboardSummary {
            today_orders: todays.len(),
            today_revenue: sum_revenue(todays.iter().copied()),
            low_stock_items: count_low_stock(inventory),
            total_skus: inventory.len(),
        };

        debug!(
            today_orders = summary.today_orders,
            today_revenue = %summary.today_revenue,
            low_stock = summary.low_stock_items,
            skus = summary.total_skus,
            "computed dashboard summary"
        );

        summary
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use slipsync_core::money::RawAmount;

    fn order(placed_at: Option<&str>, total: RawAmount) -> OrderRecord {
        OrderRecord {
            id: "o".into(),
            order_number: String::new(),
            status: "paid".into(),
            placed_at: placed_at.map(str::to_string),
            subtotal: RawAmount::Missing,
            total_amount: total,
            currency: None,
        }
    }

    fn entry(quantity: i64, reorder_point: Option<i64>) -> InventoryEntry {
        InventoryEntry {
            variant_id: "v".into(),
            product_name: String::new(),
            sku: String::new(),
            quantity,
            reorder_point,
        }
    }

    fn noon(date: &str) -> DateTime<Utc> {
        format!("{date}T12:00:00Z").parse().unwrap()
    }

    #[test]
    fn test_filter_today_matches_calendar_date() {
        let orders = vec![
            order(Some("2024-05-20T00:00:01Z"), RawAmount::Number(10.0)),
            order(Some("2024-05-20T23:59:59Z"), RawAmount::Number(20.0)),
            order(Some("2024-05-19T23:59:59Z"), RawAmount::Number(30.0)),
            order(None, RawAmount::Number(40.0)),
        ];

        let todays = filter_today(&orders, noon("2024-05-20"));
        assert_eq!(todays.len(), 2);
    }

    #[test]
    fn test_sum_revenue_normalizes_mixed_shapes() {
        let orders = vec![
            order(Some("2024-05-20T10:00:00Z"), RawAmount::from("50")),
            order(Some("2024-05-20T11:00:00Z"), RawAmount::Number(40.0)),
            order(Some("2024-05-20T12:00:00Z"), RawAmount::Missing),
            order(Some("2024-05-20T13:00:00Z"), RawAmount::from("oops")),
        ];

        assert_eq!(sum_revenue(&orders).cents(), 9000);
    }

    #[test]
    fn test_sum_revenue_does_not_use_subtotal_fallback() {
        // The stat card sums total_amount only; the series fallback
        // (revenue_amount) is deliberately not applied here.
        let mut record = order(Some("2024-05-20T10:00:00Z"), RawAmount::Missing);
        record.subtotal = RawAmount::from("25");

        assert_eq!(sum_revenue(std::iter::once(&record)).cents(), 0);
    }

    #[test]
    fn test_count_low_stock() {
        let inventory = vec![
            entry(5, Some(10)),
            entry(5, None),
            entry(2, Some(2)),
        ];

        assert_eq!(count_low_stock(&inventory), 2);
    }

    #[test]
    fn test_compute_summary() {
        let orders = vec![
            order(Some("2024-05-20T09:00:00Z"), RawAmount::from("50")),
            order(Some("2024-05-20T15:00:00Z"), RawAmount::Number(40.0)),
            order(Some("2024-05-01T15:00:00Z"), RawAmount::Number(500.0)),
        ];
        let inventory = vec![entry(5, Some(10)), entry(50, Some(10)), entry(1, None)];

        let summary = DashboardSummary::compute(&orders, &inventory, noon("2024-05-20"));

        assert_eq!(summary.today_orders, 2);
        assert_eq!(summary.today_revenue.cents(), 9000);
        assert_eq!(summary.low_stock_items, 1);
        assert_eq!(summary.total_skus, 3);
    }

    #[test]
    fn test_compute_summary_empty_feeds() {
        let summary = DashboardSummary::compute(&[], &[], noon("2024-05-20"));

        assert_eq!(summary.today_orders, 0);
        assert_eq!(summary.today_revenue.cents(), 0);
        assert_eq!(summary.low_stock_items, 0);
        assert_eq!(summary.total_skus, 0);
    }
}
