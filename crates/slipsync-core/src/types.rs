//! # Domain Types
//!
//! Core domain types shared across the SlipSync pricing pipeline.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌───────────────────┐        ┌─────────────────┐                       │
//! │  │  CatalogProduct   │        │     TaxRate     │                       │
//! │  │  ───────────────  │        │  ─────────────  │                       │
//! │  │  variant_id       │        │  bps (u32)      │                       │
//! │  │  product_name     │        │  825 = 8.25%    │                       │
//! │  │  sku              │        └─────────────────┘                       │
//! │  │  price (raw)      │                                                  │
//! │  │  quantity (stock) │   CatalogProduct is a read-only feed entry;      │
//! │  └───────────────────┘   the cart snapshots it into a LineItem.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::RawAmount;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 825 bps = 8.25%. Integer bps keep the tax step in pure integer math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from the percent figure the POS screen collects.
    ///
    /// Negative and non-finite input floors to zero — the pricing pipeline
    /// applies `max(taxRatePercent, 0)` before any tax is computed.
    pub fn from_percent(pct: f64) -> Self {
        if !pct.is_finite() || pct <= 0.0 {
            return TaxRate::zero();
        }
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percent(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Catalog Product
// =============================================================================

/// A sellable product variant as delivered by the catalog feed.
///
/// This is a read-only input shape: the POS screen lists these and hands the
/// selected one to [`Cart::add_item`]. The `quantity` field is the on-hand
/// stock at the time the feed snapshot was taken.
///
/// [`Cart::add_item`]: crate::cart::Cart::add_item
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CatalogProduct {
    /// Product variant identifier (UUID v4).
    pub variant_id: String,

    /// Display name shown in the product picker and on the receipt.
    pub product_name: String,

    /// Stock Keeping Unit - business identifier.
    pub sku: String,

    /// Unit price as the feed delivers it (number, string, or null).
    pub price: RawAmount,

    /// On-hand stock. Zero disables the variant for sale.
    #[serde(default)]
    pub quantity: i64,
}

impl CatalogProduct {
    /// Available stock for cart constraints, floored at zero.
    ///
    /// The feed occasionally reports negative on-hand counts after unsynced
    /// adjustments; those sell as out-of-stock.
    #[inline]
    pub fn available_stock(&self) -> i64 {
        self.quantity.max(0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
