//! # slipsync-report: Dashboard Aggregation for SlipSync
//!
//! Derives the dashboard's reporting figures from raw order and inventory
//! feed snapshots. Like [`slipsync_core`], everything here is a pure
//! function: the host fetches the feeds, hands them in wholesale on each
//! refresh, and renders what comes back. There is no caching, no notion of
//! in-flight requests, and no I/O.
//!
//! ## Modules
//!
//! - [`feed`] - Read-only input shapes (OrderRecord, InventoryEntry)
//! - [`summary`] - Today's stat cards (orders, revenue, low stock, SKUs)
//! - [`daily`] - The zero-filled daily revenue series and window totals
//!
//! ## Example Usage
//!
//! ```rust
//! use slipsync_report::daily::{build_daily_series, series_totals, ReportWindow};
//! use slipsync_report::feed::OrderRecord;
//! use slipsync_core::money::RawAmount;
//!
//! let orders = vec![OrderRecord {
//!     id: "7e3b1a9c-93a9-4df1-9f4e-2f3f2f6f9a11".into(),
//!     order_number: "SS-1001".into(),
//!     status: "paid".into(),
//!     placed_at: Some("2024-01-01T10:00:00Z".into()),
//!     subtotal: RawAmount::Missing,
//!     total_amount: RawAmount::Number(50.0),
//!     currency: Some("USD".into()),
//! }];
//!
//! let now = "2024-01-04T12:00:00Z".parse().unwrap();
//! let series = build_daily_series(&orders, ReportWindow::Week, now);
//! assert_eq!(series_totals(&series).total_revenue.cents(), 5000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod daily;
pub mod feed;
pub mod summary;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use daily::{build_daily_series, series_totals, DailyBucket, ReportWindow, SeriesTotals};
pub use feed::{InventoryEntry, OrderRecord};
pub use summary::{count_low_stock, filter_today, sum_revenue, DashboardSummary};
