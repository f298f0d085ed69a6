//! # Feed Types
//!
//! Read-only input shapes, exactly as the merchant API delivers them.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Feed Shapes                                     │
//! │                                                                         │
//! │  ┌───────────────────┐        ┌────────────────────┐                    │
//! │  │   OrderRecord     │        │   InventoryEntry   │                    │
//! │  │  ───────────────  │        │  ────────────────  │                    │
//! │  │  id               │        │  variant_id        │                    │
//! │  │  placed_at | null │        │  product_name      │                    │
//! │  │  subtotal (raw)   │        │  sku               │                    │
//! │  │  total (raw)      │        │  quantity          │                    │
//! │  │  status, currency │        │  reorder_point?    │                    │
//! │  └───────────────────┘        └────────────────────┘                    │
//! │                                                                         │
//! │  The aggregator never mutates these; each refresh replaces the whole    │
//! │  snapshot.                                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use slipsync_core::money::{Money, RawAmount};

// =============================================================================
// Order Record
// =============================================================================

/// One order as the order feed reports it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderRecord {
    /// Order identifier (UUID v4).
    pub id: String,

    /// Human-readable receipt number.
    #[serde(default)]
    pub order_number: String,

    /// Order status: pending, paid, cancelled.
    #[serde(default)]
    pub status: String,

    /// ISO-8601 placement timestamp; null for never-placed drafts.
    #[serde(default)]
    pub placed_at: Option<String>,

    /// Pre-tax subtotal as delivered (number, string, or null).
    #[serde(default)]
    pub subtotal: RawAmount,

    /// Grand total as delivered (number, string, or null).
    #[serde(default)]
    pub total_amount: RawAmount,

    /// Store currency code.
    #[serde(default)]
    pub currency: Option<String>,
}

impl OrderRecord {
    /// UTC calendar date the order was placed: the first 10 characters of
    /// the ISO-8601 timestamp. `None` for null or unparseable timestamps —
    /// those orders are excluded from any date-keyed aggregation.
    pub fn placed_on(&self) -> Option<NaiveDate> {
        let stamp = self.placed_at.as_deref()?;
        let day = stamp.get(..10)?;
        NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
    }

    /// Revenue attributed to this order by the daily series.
    ///
    /// `total_amount` normally wins; a falsy total (null, empty, zero)
    /// falls back to `subtotal`. Early orders predate the backend storing
    /// totals, and the chart would otherwise show them as free.
    pub fn revenue_amount(&self) -> Money {
        if self.total_amount.is_falsy() {
            self.subtotal.normalize()
        } else {
            self.total_amount.normalize()
        }
    }
}

// =============================================================================
// Inventory Entry
// =============================================================================

/// One product variant's stock position as the inventory feed reports it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InventoryEntry {
    /// Product variant identifier (UUID v4).
    pub variant_id: String,

    /// Display name.
    #[serde(default)]
    pub product_name: String,

    /// Stock Keeping Unit.
    #[serde(default)]
    pub sku: String,

    /// On-hand quantity.
    #[serde(default)]
    pub quantity: i64,

    /// Restock threshold; null when the variant has no threshold configured.
    #[serde(default)]
    pub reorder_point: Option<i64>,
}

impl InventoryEntry {
    /// Low stock holds when a reorder point is configured and the on-hand
    /// quantity has fallen to or below it.
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        match self.reorder_point {
            Some(threshold) => self.quantity <= threshold,
            None => false,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
