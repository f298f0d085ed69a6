//! # slipsync-core: Pure Pricing Logic for SlipSync
//!
//! This crate is the **heart** of the SlipSync point-of-sale flow. It
//! contains the order-cart and pricing computation as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      SlipSync Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐    │
//! │  │                 Dashboard (React)                               │    │
//! │  │   Product picker ──► Cart UI ──► Totals panel ──► Submit        │    │
//! │  └─────────────────────────────┬───────────────────────────────────┘    │
//! │                                │ JSON                                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐    │
//! │  │               ★ slipsync-core (THIS CRATE) ★                    │    │
//! │  │                                                                 │    │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐    │    │
//! │  │   │   types   │  │   money   │  │   cart    │  │ validation│    │    │
//! │  │   │  Catalog  │  │   Money   │  │   Cart    │  │   rules   │    │    │
//! │  │   │  TaxRate  │  │ RawAmount │  │ LineItem  │  │  checks   │    │    │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘    │    │
//! │  │                                                                 │    │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS            │    │
//! │  └─────────────────────────────┬───────────────────────────────────┘    │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐    │
//! │  │                 Merchant API (out of scope)                     │    │
//! │  │            Persists orders, owns the feeds we consume           │    │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (CatalogProduct, TaxRate)
//! - [`money`] - Money type with integer arithmetic plus lenient feed coercion
//! - [`cart`] - Cart, LineItem, and the pricing pipeline
//! - [`error`] - Domain error types
//! - [`validation`] - Form and identifier validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every computation is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Parse-or-zero at the boundary**: malformed feed amounts become 0, never a crash
//!
//! ## Example Usage
//!
//! ```rust
//! use slipsync_core::cart::Cart;
//! use slipsync_core::money::{Money, RawAmount};
//! use slipsync_core::types::{CatalogProduct, TaxRate};
//!
//! let product = CatalogProduct {
//!     variant_id: "550e8400-e29b-41d4-a716-446655440000".into(),
//!     product_name: "Espresso Beans".into(),
//!     sku: "BEAN-250".into(),
//!     price: RawAmount::Number(10.0),
//!     quantity: 8,
//! };
//!
//! let mut cart = Cart::new();
//! cart.add_item(&product, 2)?;
//! cart.set_discount(Money::from_cents(500));
//! cart.set_tax_rate(TaxRate::from_percent(10.0));
//!
//! let totals = cart.compute_totals();
//! assert_eq!(totals.total.cents(), 1650); // $16.50
//! # Ok::<(), slipsync_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use slipsync_core::Money` instead of
// `use slipsync_core::money::Money`

pub use cart::{Cart, LineItem, OrderDraft, OrderDraftLine, PricingResult};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{Money, RawAmount};
pub use types::{CatalogProduct, TaxRate};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum unique lines allowed in a single cart.
///
/// ## Business Reason
/// Prevents runaway carts and keeps submission payloads a sane size.
/// Enforced by the form layer, not the cart operations themselves.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity accepted by the stock-adjustment and new-product forms.
///
/// ## Business Reason
/// Catches accidental over-entry (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;
