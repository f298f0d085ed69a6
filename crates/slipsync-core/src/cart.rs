//! # Cart Module
//!
//! The order cart assembled on the POS screen, and the pricing pipeline
//! that derives its totals.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  POS Action               Operation                Cart Change          │
//! │  ──────────               ─────────                ───────────          │
//! │                                                                         │
//! │  Click product ──────────► add_item() ───────────► insert / bump qty    │
//! │                                                                         │
//! │  Edit quantity ──────────► set_quantity() ───────► qty = n (capped)     │
//! │                                                                         │
//! │  Click remove ───────────► remove_item() ────────► retain others        │
//! │                                                                         │
//! │  Edit discount / tax ────► set_discount() etc. ──► scalar update        │
//! │                                                                         │
//! │  Read totals ────────────► compute_totals() ─────► (pure, no change)    │
//! │                                                                         │
//! │  Submit order ───────────► to_order_draft() ─────► (pure, no change)    │
//! │                                                                         │
//! │  New sale ───────────────► reset() ──────────────► everything cleared   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Pricing Pipeline
//! ```text
//! subtotal = Σ (unit_price × quantity)
//! normalized_discount = clamp(discount_amount, 0, subtotal)
//! taxable_base = max(subtotal − normalized_discount, 0)
//! tax_amount = half-up(taxable_base × tax_rate)      ← the ONLY rounding
//! total = taxable_base + tax_amount
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{CatalogProduct, TaxRate};
use crate::validation::validate_variant_id;

// =============================================================================
// Line Item
// =============================================================================

/// One product-variant line within a cart.
///
/// ## Design Notes
/// - `unit_price` is frozen at add time: a catalog price change after the
///   cashier added the line must not silently reprice an open sale.
/// - `available_stock` is the feed snapshot the stock cap is enforced
///   against. Zero means the variant does not track stock here and the cap
///   is disabled.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineItem {
    /// Product variant ID (UUID v4).
    pub variant_id: String,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// SKU at time of adding (frozen).
    pub sku: String,

    /// Unit price at time of adding (frozen).
    pub unit_price: Money,

    /// Quantity in cart. Invariant: `quantity ≤ available_stock` whenever
    /// `available_stock > 0`.
    pub quantity: i64,

    /// On-hand stock at time of adding; 0 disables the cap.
    pub available_stock: i64,

    /// When this line was added to the cart.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl LineItem {
    /// Creates a cart line from a catalog entry, freezing its price.
    pub fn from_product(product: &CatalogProduct, quantity: i64) -> Self {
        LineItem {
            variant_id: product.variant_id.clone(),
            name: product.product_name.clone(),
            sku: product.sku.clone(),
            unit_price: product.price.normalize(),
            quantity,
            available_stock: product.available_stock(),
            added_at: Utc::now(),
        }
    }

    /// Line total (unit price × quantity). Exact integer arithmetic.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price * self.quantity
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The order cart being assembled into a sale.
///
/// ## Invariants
/// - Lines are unique by `variant_id` (adding the same variant bumps its
///   quantity instead of duplicating the row)
/// - `quantity ≤ available_stock` for every stock-tracked line
/// - Discount and tax rate are cart-level scalars, not per-item
/// - `discount_amount` is stored raw; clamping happens at pricing time
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Cart {
    /// Line items, in the order the cashier added them.
    pub items: Vec<LineItem>,

    /// Order-level discount as entered, un-clamped.
    pub discount_amount: Money,

    /// Order-level tax rate.
    pub tax_rate: TaxRate,

    /// Free-text note attached to the order.
    pub notes: String,

    /// When the cart was created / last reset.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            discount_amount: Money::zero(),
            tax_rate: TaxRate::zero(),
            notes: String::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a catalog product to the cart, or bumps its quantity if the
    /// variant is already present.
    ///
    /// The requested quantity is sanitized to at least 1: the POS quantity
    /// spinner clamps rather than rejects.
    ///
    /// ## Errors
    /// - [`CoreError::OutOfStock`] when the product has no available stock;
    ///   cart unchanged.
    /// - [`CoreError::InsufficientStock`] when the combined quantity
    ///   (existing + requested) would exceed available stock; cart unchanged.
    pub fn add_item(&mut self, product: &CatalogProduct, requested_qty: i64) -> CoreResult<()> {
        let available = product.available_stock();
        if available <= 0 {
            return Err(CoreError::OutOfStock {
                name: product.product_name.clone(),
            });
        }

        let requested = requested_qty.max(1);

        if let Some(item) = self
            .items
            .iter_mut()
            .find(|i| i.variant_id == product.variant_id)
        {
            let combined = item.quantity + requested;
            if combined > available {
                return Err(CoreError::InsufficientStock {
                    sku: item.sku.clone(),
                    available,
                    requested: combined,
                });
            }
            item.quantity = combined;
            return Ok(());
        }

        if requested > available {
            return Err(CoreError::InsufficientStock {
                sku: product.sku.clone(),
                available,
                requested,
            });
        }

        self.items.push(LineItem::from_product(product, requested));
        Ok(())
    }

    /// Sets the quantity of an existing line.
    ///
    /// Values ≤ 0 are silently ignored, as is an absent variant — the
    /// dashboard's quantity input behaves this way and callers rely on it.
    ///
    /// ## Errors
    /// - [`CoreError::InsufficientStock`] when the line tracks stock and
    ///   `new_qty` exceeds it. The quantity is left unchanged, not clamped.
    pub fn set_quantity(&mut self, variant_id: &str, new_qty: i64) -> CoreResult<()> {
        if new_qty <= 0 {
            return Ok(());
        }

        let Some(item) = self.items.iter_mut().find(|i| i.variant_id == variant_id) else {
            return Ok(());
        };

        if item.available_stock > 0 && new_qty > item.available_stock {
            return Err(CoreError::InsufficientStock {
                sku: item.sku.clone(),
                available: item.available_stock,
                requested: new_qty,
            });
        }

        item.quantity = new_qty;
        Ok(())
    }

    /// Removes a line by variant ID. Removing an absent id is a no-op.
    pub fn remove_item(&mut self, variant_id: &str) {
        self.items.retain(|i| i.variant_id != variant_id);
    }

    /// Sets the order-level discount amount (raw; clamped at pricing time).
    pub fn set_discount(&mut self, amount: Money) {
        self.discount_amount = amount;
    }

    /// Sets the order-level tax rate.
    pub fn set_tax_rate(&mut self, rate: TaxRate) {
        self.tax_rate = rate;
    }

    /// Sets the order note.
    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    /// Derives the cart's totals. Pure: calling this twice on an unchanged
    /// cart returns identical results.
    pub fn compute_totals(&self) -> PricingResult {
        let subtotal: Money = self.items.iter().map(LineItem::line_total).sum();
        let normalized_discount = self.discount_amount.clamp(Money::zero(), subtotal);
        let taxable_base = (subtotal - normalized_discount).max(Money::zero());
        let tax_amount = taxable_base.calculate_tax(self.tax_rate);
        let total = taxable_base + tax_amount;

        PricingResult {
            item_count: self.items.len(),
            total_quantity: self.items.iter().map(|i| i.quantity).sum(),
            subtotal,
            normalized_discount,
            taxable_base,
            tax_amount,
            total,
        }
    }

    /// Builds the order submission payload.
    ///
    /// The draft carries the *normalized* discount — the backend must never
    /// see a discount the pricing pipeline would not honor.
    ///
    /// ## Errors
    /// - [`CoreError::EmptyCart`] when there is nothing to submit.
    /// - [`CoreError::Validation`] when a line carries a malformed
    ///   variant id.
    pub fn to_order_draft(&self) -> CoreResult<OrderDraft> {
        if self.items.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        for item in &self.items {
            validate_variant_id(&item.variant_id)?;
        }

        let totals = self.compute_totals();

        Ok(OrderDraft {
            items: self
                .items
                .iter()
                .map(|i| OrderDraftLine {
                    variant_id: i.variant_id.clone(),
                    quantity: i.quantity,
                    unit_price: i.unit_price,
                })
                .collect(),
            discount_amount: totals.normalized_discount,
            tax_rate: self.tax_rate,
            notes: self.notes.clone(),
        })
    }

    /// Clears the cart back to its zero defaults for the next sale.
    pub fn reset(&mut self) {
        self.items.clear();
        self.discount_amount = Money::zero();
        self.tax_rate = TaxRate::zero();
        self.notes.clear();
        self.created_at = Utc::now();
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Pricing Result
// =============================================================================

/// Derived cart totals. Recomputed on every read, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PricingResult {
    /// Number of unique lines.
    pub item_count: usize,
    /// Total quantity across all lines.
    pub total_quantity: i64,
    /// Σ (unit price × quantity), exact.
    pub subtotal: Money,
    /// Discount clamped into `[0, subtotal]`.
    pub normalized_discount: Money,
    /// `max(subtotal − normalized_discount, 0)`.
    pub taxable_base: Money,
    /// Half-up rounded to cents — the only rounding in the pipeline.
    pub tax_amount: Money,
    /// `taxable_base + tax_amount`.
    pub total: Money,
}

// =============================================================================
// Order Draft
// =============================================================================

/// One line of an order submission payload.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderDraftLine {
    pub variant_id: String,
    pub quantity: i64,
    pub unit_price: Money,
}

/// The payload the POS screen posts to the merchant API.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderDraft {
    pub items: Vec<OrderDraftLine>,
    /// Normalized (clamped) discount, never the raw entry.
    pub discount_amount: Money,
    pub tax_rate: TaxRate,
    pub notes: String,
}

// =============================================================================
// Unit Tests
// =============================================================================
