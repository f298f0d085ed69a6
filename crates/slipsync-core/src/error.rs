//! # Error Types
//!
//! Domain-specific error types for slipsync-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  slipsync-core errors (this file)                                       │
//! │  ├── CoreError        - Cart / pricing rule violations                  │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → host application → toast           │
//! │                                                                         │
//! │  Every variant is locally recoverable: the cart is left unchanged and   │
//! │  the caller decides how to surface the message.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (SKU, counts)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Cart and pricing rule violations.
///
/// These should be caught by the host and translated to user-facing toasts;
/// none of them is fatal to the process.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product has zero available stock.
    ///
    /// ## When This Occurs
    /// - `add_item` on a variant whose feed snapshot reports no stock
    #[error("{name} is out of stock")]
    OutOfStock { name: String },

    /// Requested quantity exceeds available stock.
    ///
    /// ## User Workflow
    /// ```text
    /// Add to cart (qty: 2, already 2 in cart)
    ///      │
    ///      ▼
    /// Check stock: available=3, combined=4
    ///      │
    ///      ▼
    /// InsufficientStock { sku: "BEAN-250", available: 3, requested: 4 }
    ///      │
    ///      ▼
    /// UI shows: "Only 3 units available for Espresso Beans"
    /// ```
    #[error("Insufficient stock for {sku}: available {available}, requested {requested}")]
    InsufficientStock {
        sku: String,
        available: i64,
        requested: i64,
    },

    /// Order submission attempted with no line items.
    #[error("Cart is empty")]
    EmptyCart,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when form input doesn't meet requirements, before any
/// business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., invalid UUID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
