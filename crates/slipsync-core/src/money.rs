//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely, plus the
//! `RawAmount` boundary type for the merchant API's loosely-typed feeds.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  The dashboard used to price carts in JavaScript floats:                │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Every figure in the pricing pipeline is an i64 cent count.           │
//! │    Rounding happens exactly once, at the tax-amount step.               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why RawAmount?
//! The merchant API is inconsistent about monetary fields: sometimes a JSON
//! number, sometimes a numeric string, sometimes null. `RawAmount` mirrors
//! that shape verbatim and `normalize()` is the single place where it is
//! coerced to `Money` (parse-or-zero). Callers needing stricter behavior
//! must validate before invoking the pricing functions.
//!
//! ## Usage
//! ```rust
//! use slipsync_core::money::{Money, RawAmount};
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(1099); // $10.99
//!
//! // Coerce a feed value
//! let total = RawAmount::Text("50".into()).normalize();
//! assert_eq!(total.cents(), 5000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative intermediates (oversized discounts)
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money Flows
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  CatalogProduct.price ──► LineItem.unit_price ──► line totals           │
/// │                                                                         │
/// │  subtotal ──► discount clamp ──► taxable base ──► tax ──► total         │
/// │                                                                         │
/// │  OrderRecord.total_amount ──► daily revenue buckets                     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use slipsync_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Quantizes a decimal major-unit amount (e.g. `10.99` dollars) to cents.
    ///
    /// Non-finite input (NaN, infinities) yields zero — the feeds are not
    /// trusted to be clean, and a poisoned figure must not poison a report.
    pub fn from_decimal(value: f64) -> Self {
        if !value.is_finite() {
            return Money::zero();
        }
        Money((value * 100.0).round() as i64)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Clamps the value into `[min, max]`.
    ///
    /// ## User Workflow
    /// ```text
    /// Discount entry: -3.00  ──► clamp(0, subtotal) ──► 0.00
    /// Discount entry: 999.00 ──► clamp(0, subtotal) ──► subtotal
    /// ```
    /// This is how a cashier typo can never push a total below zero.
    ///
    /// Floor first, then cap: unlike `i64::clamp` this never panics when
    /// `max < min`, which a negative feed price can produce.
    #[inline]
    pub fn clamp(self, min: Money, max: Money) -> Money {
        Money(self.0.max(min.0).min(max.0))
    }

    /// Calculates tax with half-up rounding to whole cents.
    ///
    /// ## Implementation
    /// Integer math only: `(cents × bps + 5000) / 10000`. The `+5000`
    /// provides the half-up rounding (5000/10000 = 0.5). i128 intermediates
    /// keep large carts from overflowing.
    ///
    /// ## Example
    /// ```rust
    /// use slipsync_core::money::Money;
    /// use slipsync_core::types::TaxRate;
    ///
    /// let base = Money::from_cents(1500); // $15.00
    /// let rate = TaxRate::from_percent(10.0);
    ///
    /// // $15.00 × 10% = $1.50
    /// assert_eq!(base.calculate_tax(rate).cents(), 150);
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        let tax_cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(tax_cents as i64)
    }

    /// Multiplies money by a quantity.
    ///
    /// ## User Workflow
    /// ```text
    /// Line: Espresso Beans $12.50 × 3 ──► $37.50
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and logs. The dashboard formats currency itself
/// (it knows the store's currency code; this type does not).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summation over iterators of Money (subtotals, revenue totals).
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Raw Feed Amounts
// =============================================================================

/// A monetary field exactly as the merchant API delivers it.
///
/// The order and catalog feeds serialize amounts as `number | string | null`
/// depending on which backend code path produced them. This enum matches
/// that union so feed structs deserialize without loss, and [`normalize`]
/// is the one sanctioned coercion to [`Money`].
///
/// [`normalize`]: RawAmount::normalize
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum RawAmount {
    /// A JSON number, in major units (`40` means $40.00).
    Number(f64),
    /// A numeric string, in major units (`"50"` means $50.00).
    Text(String),
    /// Field absent or null.
    #[default]
    Missing,
}

impl RawAmount {
    /// Coerces the raw value to [`Money`], parse-or-zero.
    ///
    /// Non-numeric strings, null, and non-finite numbers all collapse to
    /// zero cents rather than erroring. Upstream data quality is uneven
    /// enough that a strict parse would take down every dashboard card.
    pub fn normalize(&self) -> Money {
        match self {
            RawAmount::Number(value) => Money::from_decimal(*value),
            RawAmount::Text(text) => text
                .trim()
                .parse::<f64>()
                .map(Money::from_decimal)
                .unwrap_or_else(|_| Money::zero()),
            RawAmount::Missing => Money::zero(),
        }
    }

    /// True when the raw value is absent, an empty string, or numeric zero.
    ///
    /// The revenue chart falls back from `total_amount` to `subtotal` on
    /// falsy totals; this predicate is that JS truthiness test, spelled out.
    pub fn is_falsy(&self) -> bool {
        match self {
            RawAmount::Number(value) => *value == 0.0 || !value.is_finite(),
            RawAmount::Text(text) => text.is_empty(),
            RawAmount::Missing => true,
        }
    }
}

impl From<f64> for RawAmount {
    fn from(value: f64) -> Self {
        RawAmount::Number(value)
    }
}

impl From<&str> for RawAmount {
    fn from(value: &str) -> Self {
        RawAmount::Text(value.to_string())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_decimal_quantizes_to_cents() {
        assert_eq!(Money::from_decimal(10.99).cents(), 1099);
        assert_eq!(Money::from_decimal(50.0).cents(), 5000);
        assert_eq!(Money::from_decimal(0.1 + 0.2).cents(), 30);
        assert_eq!(Money::from_decimal(f64::NAN).cents(), 0);
        assert_eq!(Money::from_decimal(f64::INFINITY).cents(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);

        let total: Money = [a, b, b].into_iter().sum();
        assert_eq!(total.cents(), 2000);
    }

    #[test]
    fn test_clamp() {
        let subtotal = Money::from_cents(2000);
        let zero = Money::zero();

        assert_eq!(Money::from_cents(-300).clamp(zero, subtotal), zero);
        assert_eq!(Money::from_cents(99999).clamp(zero, subtotal), subtotal);
        assert_eq!(
            Money::from_cents(500).clamp(zero, subtotal),
            Money::from_cents(500)
        );
    }

    #[test]
    fn test_tax_calculation_basic() {
        // $15.00 at 10% = $1.50
        let base = Money::from_cents(1500);
        let tax = base.calculate_tax(TaxRate::from_percent(10.0));
        assert_eq!(tax.cents(), 150);
    }

    #[test]
    fn test_tax_calculation_rounds_half_up() {
        // $10.01 at 8.25% = $0.825825 → $0.83
        let base = Money::from_cents(1001);
        let tax = base.calculate_tax(TaxRate::from_bps(825));
        assert_eq!(tax.cents(), 83);

        // $0.05 at 10% = $0.005 → rounds up to $0.01
        let base = Money::from_cents(5);
        let tax = base.calculate_tax(TaxRate::from_percent(10.0));
        assert_eq!(tax.cents(), 1);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(299);
        assert_eq!(unit_price.multiply_quantity(3).cents(), 897);
    }

    #[test]
    fn test_raw_amount_normalize() {
        assert_eq!(RawAmount::Number(40.0).normalize().cents(), 4000);
        assert_eq!(RawAmount::from("50").normalize().cents(), 5000);
        assert_eq!(RawAmount::from(" 12.34 ").normalize().cents(), 1234);
        assert_eq!(RawAmount::from("abc").normalize().cents(), 0);
        assert_eq!(RawAmount::from("").normalize().cents(), 0);
        assert_eq!(RawAmount::Missing.normalize().cents(), 0);
        assert_eq!(RawAmount::Number(f64::NAN).normalize().cents(), 0);
    }

    #[test]
    fn test_raw_amount_falsiness() {
        assert!(RawAmount::Missing.is_falsy());
        assert!(RawAmount::Number(0.0).is_falsy());
        assert!(RawAmount::from("").is_falsy());

        assert!(!RawAmount::Number(40.0).is_falsy());
        // "0" is a non-empty string: truthy, exactly like the JS it replaces.
        assert!(!RawAmount::from("0").is_falsy());
    }

    #[test]
    fn test_raw_amount_deserializes_feed_union() {
        let number: RawAmount = serde_json::from_str("40").unwrap();
        assert_eq!(number, RawAmount::Number(40.0));

        let text: RawAmount = serde_json::from_str("\"50\"").unwrap();
        assert_eq!(text, RawAmount::Text("50".into()));

        let missing: RawAmount = serde_json::from_str("null").unwrap();
        assert_eq!(missing, RawAmount::Missing);
    }
}
