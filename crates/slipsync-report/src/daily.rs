//! # Daily Series Module
//!
//! Buckets the order feed into one revenue/order-count entry per calendar
//! day over a selectable trailing window, zero-filling quiet days so the
//! area chart draws a continuous line.
//!
//! ## Bucketing Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  raw orders                                                             │
//! │      │  drop null / unparseable placed_at                               │
//! │      ▼                                                                  │
//! │  group by calendar date (UTC, first 10 chars of ISO timestamp)          │
//! │      │  keep dates ≥ now − window                                       │
//! │      ▼                                                                  │
//! │  span = [earliest present date .. latest present date]                  │
//! │      │  fill absent dates with {revenue: 0, orders: 0}                  │
//! │      ▼                                                                  │
//! │  ascending DailyBucket sequence (contiguous, no gaps)                   │
//! │                                                                         │
//! │  An empty window yields an empty series: no buckets are fabricated      │
//! │  from nothing, the chart shows its empty state instead.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use slipsync_core::money::Money;

use crate::feed::OrderRecord;

// =============================================================================
// Report Window
// =============================================================================

/// The trailing windows the dashboard's range picker offers.
///
/// A closed set: the picker can produce nothing else, so there is no
/// arbitrary-days constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ReportWindow {
    /// Trailing 7 days.
    Week,
    /// Trailing 30 days.
    Month,
    /// Trailing 90 days. The picker's default.
    #[default]
    Quarter,
}

impl ReportWindow {
    /// Window length in days.
    #[inline]
    pub const fn days(self) -> u64 {
        match self {
            ReportWindow::Week => 7,
            ReportWindow::Month => 30,
            ReportWindow::Quarter => 90,
        }
    }

    /// Parses the dashboard's range-picker value.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "7d" => Some(ReportWindow::Week),
            "30d" => Some(ReportWindow::Month),
            "90d" => Some(ReportWindow::Quarter),
            _ => None,
        }
    }

    /// The range-picker value for this window.
    pub const fn label(self) -> &'static str {
        match self {
            ReportWindow::Week => "7d",
            ReportWindow::Month => "30d",
            ReportWindow::Quarter => "90d",
        }
    }
}

// =============================================================================
// Daily Bucket
// =============================================================================

/// One calendar day's aggregated revenue and order count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DailyBucket {
    /// ISO calendar date.
    #[ts(as = "String")]
    pub date: NaiveDate,
    /// Revenue placed on this date.
    pub revenue: Money,
    /// Orders placed on this date.
    pub order_count: u32,
}

/// Window-level sums over a produced series, for the summary line above
/// the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SeriesTotals {
    pub total_revenue: Money,
    pub total_orders: u64,
}

// =============================================================================
// Series Construction
// =============================================================================

/// Builds the contiguous daily revenue series for the selected window.
///
/// `now` is the reference timestamp: the window starts `window.days()`
/// calendar days before `now`'s date, inclusive. Orders before the window
/// start, with null timestamps, or with unparseable timestamps are dropped.
///
/// The span runs from the earliest to the latest in-window date that
/// actually has orders; dates between them with none are zero-filled.
pub fn build_daily_series(
    orders: &[OrderRecord],
    window: ReportWindow,
    now: DateTime<Utc>,
) -> Vec<DailyBucket> {
    let start = now
        .date_naive()
        .checked_sub_days(Days::new(window.days()))
        .unwrap_or(NaiveDate::MIN);

    // BTreeMap keeps the dates sorted; ISO lexical order equals
    // chronological order at day granularity.
    let mut grouped: BTreeMap<NaiveDate, (Money, u32)> = BTreeMap::new();
    for order in orders {
        let Some(date) = order.placed_on() else {
            continue;
        };
        if date < start {
            continue;
        }
        let slot = grouped.entry(date).or_insert((Money::zero(), 0));
        slot.0 += order.revenue_amount();
        slot.1 += 1;
    }

    let (Some(&first), Some(&last)) = (grouped.keys().next(), grouped.keys().next_back()) else {
        debug!(window = window.label(), "no orders in window");
        return Vec::new();
    };

    let mut series = Vec::new();
    let mut day = first;
    loop {
        let (revenue, order_count) = grouped.get(&day).copied().unwrap_or((Money::zero(), 0));
        series.push(DailyBucket {
            date: day,
            revenue,
            order_count,
        });
        if day >= last {
            break;
        }
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }

    debug!(
        window = window.label(),
        orders = orders.len(),
        buckets = series.len(),
        "built daily revenue series"
    );

    series
}

/// Sums a produced series into the window summary figures.
pub fn series_totals(series: &[DailyBucket]) -> SeriesTotals {
    SeriesTotals {
        total_revenue: series.iter().map(|b| b.revenue).sum(),
        total_orders: series.iter().map(|b| b.order_count as u64).sum(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use slipsync_core::money::RawAmount;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    }

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

    fn reference(date: &str) -> DateTime<Utc> {
        format!("{date}T12:00:00Z").parse().unwrap()
    }

    fn day(date: &str) -> NaiveDate {
        date.parse().unwrap()
    }

    #[test]
    fn test_series_zero_fills_gap_days() {
        init_tracing();
        let orders = vec![
            order(Some("2024-01-01T10:00:00Z"), RawAmount::from("50")),
            order(Some("2024-01-03T10:00:00Z"), RawAmount::Number(40.0)),
        ];

        let series = build_daily_series(&orders, ReportWindow::Week, reference("2024-01-04"));

        assert_eq!(series.len(), 3);
        assert_eq!(series[0].date, day("2024-01-01"));
        assert_eq!(series[0].revenue.cents(), 5000);
        assert_eq!(series[0].order_count, 1);
        assert_eq!(series[1].revenue.cents(), 0);
        assert_eq!(series[1].order_count, 0);
        assert_eq!(series[2].revenue.cents(), 4000);

        let totals = series_totals(&series);
        assert_eq!(totals.total_revenue.cents(), 9000);
        assert_eq!(totals.total_orders, 2);
    }

    #[test]
    fn test_series_is_contiguous_and_ascending() {
        let orders = vec![
            order(Some("2024-03-10T08:00:00Z"), RawAmount::Number(10.0)),
            order(Some("2024-03-01T08:00:00Z"), RawAmount::Number(20.0)),
            order(Some("2024-03-06T08:00:00Z"), RawAmount::Number(30.0)),
        ];

        let series = build_daily_series(&orders, ReportWindow::Month, reference("2024-03-15"));

        assert_eq!(series.first().unwrap().date, day("2024-03-01"));
        assert_eq!(series.last().unwrap().date, day("2024-03-10"));
        for pair in series.windows(2) {
            assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
        }
    }

    #[test]
    fn test_same_day_orders_accumulate() {
        let orders = vec![
            order(Some("2024-01-02T09:00:00Z"), RawAmount::Number(10.0)),
            order(Some("2024-01-02T17:30:00Z"), RawAmount::from("5.50")),
        ];

        let series = build_daily_series(&orders, ReportWindow::Week, reference("2024-01-03"));

        assert_eq!(series.len(), 1);
        assert_eq!(series[0].revenue.cents(), 1550);
        assert_eq!(series[0].order_count, 2);
    }

    #[test]
    fn test_orders_before_window_are_dropped() {
        let orders = vec![
            order(Some("2023-12-01T10:00:00Z"), RawAmount::Number(99.0)),
            order(Some("2024-01-02T10:00:00Z"), RawAmount::Number(10.0)),
        ];

        let series = build_daily_series(&orders, ReportWindow::Week, reference("2024-01-05"));

        assert_eq!(series.len(), 1);
        assert_eq!(series[0].date, day("2024-01-02"));
    }

    #[test]
    fn test_window_start_is_inclusive() {
        // Reference 2024-01-08, week window → start 2024-01-01.
        let orders = vec![
            order(Some("2024-01-01T00:00:00Z"), RawAmount::Number(10.0)),
            order(Some("2023-12-31T23:59:59Z"), RawAmount::Number(99.0)),
        ];

        let series = build_daily_series(&orders, ReportWindow::Week, reference("2024-01-08"));

        assert_eq!(series.len(), 1);
        assert_eq!(series[0].date, day("2024-01-01"));
    }

    #[test]
    fn test_empty_window_yields_empty_series() {
        let orders = vec![order(Some("2023-01-01T10:00:00Z"), RawAmount::Number(10.0))];

        let series = build_daily_series(&orders, ReportWindow::Week, reference("2024-06-01"));
        assert!(series.is_empty());

        let totals = series_totals(&series);
        assert_eq!(totals.total_revenue.cents(), 0);
        assert_eq!(totals.total_orders, 0);
    }

    #[test]
    fn test_null_and_garbage_timestamps_are_excluded() {
        let orders = vec![
            order(None, RawAmount::Number(99.0)),
            order(Some("garbage"), RawAmount::Number(99.0)),
            order(Some("2024-01-02T10:00:00Z"), RawAmount::Number(10.0)),
        ];

        let series = build_daily_series(&orders, ReportWindow::Week, reference("2024-01-03"));

        assert_eq!(series.len(), 1);
        assert_eq!(series_totals(&series).total_orders, 1);
    }

    #[test]
    fn test_subtotal_fallback_feeds_the_series() {
        let mut fallback = order(Some("2024-01-02T10:00:00Z"), RawAmount::Missing);
        fallback.subtotal = RawAmount::from("25");

        let series = build_daily_series(&[fallback], ReportWindow::Week, reference("2024-01-03"));

        assert_eq!(series[0].revenue.cents(), 2500);
    }

    #[test]
    fn test_report_window_labels() {
        assert_eq!(ReportWindow::parse("7d"), Some(ReportWindow::Week));
        assert_eq!(ReportWindow::parse("30d"), Some(ReportWindow::Month));
        assert_eq!(ReportWindow::parse("90d"), Some(ReportWindow::Quarter));
        assert_eq!(ReportWindow::parse("1y"), None);

        assert_eq!(ReportWindow::Week.days(), 7);
        assert_eq!(ReportWindow::Month.days(), 30);
        assert_eq!(ReportWindow::Quarter.days(), 90);
        assert_eq!(ReportWindow::default(), ReportWindow::Quarter);
        assert_eq!(ReportWindow::Quarter.label(), "90d");
    }
}
