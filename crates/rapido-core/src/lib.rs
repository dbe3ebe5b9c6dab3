//! # rapido-core: Pure Business Logic for Rápido POS
//!
//! This crate is the **heart** of Rápido POS, a point-of-sale and
//! expense-tracking system for a single car wash. It contains all
//! business rules as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Rápido POS Architecture                        │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                     Frontend (external)                       │ │
//! │  │   Service Queue ──► Expenses ──► History ──► Admin            │ │
//! │  └───────────────────────────────┬───────────────────────────────┘ │
//! │                                  │                                 │
//! │  ┌───────────────────────────────▼───────────────────────────────┐ │
//! │  │               ★ rapido-core (THIS CRATE) ★                    │ │
//! │  │                                                               │ │
//! │  │  ┌──────────┐ ┌──────────┐ ┌───────────┐ ┌────────────┐      │ │
//! │  │  │  types   │ │  money   │ │  report   │ │ validation │      │ │
//! │  │  │ Expense  │ │  Money   │ │ Monthly-  │ │   rules    │      │ │
//! │  │  │ Service  │ │ centavos │ │  Report   │ │   checks   │      │ │
//! │  │  └──────────┘ └──────────┘ └───────────┘ └────────────┘      │ │
//! │  │                                                               │ │
//! │  │  NO I/O • NO DATABASE • NO NETWORK • NO WALL CLOCK            │ │
//! │  └───────────────────────────────┬───────────────────────────────┘ │
//! │                                  │                                 │
//! │  ┌───────────────────────────────▼───────────────────────────────┐ │
//! │  │                 rapido-db (Database Layer)                    │ │
//! │  │          SQLite queries, migrations, repositories             │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (ExpenseType, Expense, Service, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`report`] - Revenue/expense/profit aggregation
//! - [`validation`] - Business rule validation
//! - [`error`] - Validation error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in centavos (i64) to avoid float errors
//! 4. **Explicit "today"**: The current date is a parameter, never `Utc::now()`
//!
//! ## Example Usage
//!
//! ```rust
//! use rapido_core::money::Money;
//! use rapido_core::report::{summarize, ReportConfig};
//! use rapido_core::types::MonthKey;
//!
//! // Parse money from form input (never from floats!)
//! let amount = Money::parse("145.50").unwrap();
//! assert_eq!(amount.cents(), 14550);
//!
//! // Accounting periods are "YYYY-MM" keys
//! let month: MonthKey = "2024-03".parse().unwrap();
//! assert_eq!(month.to_string(), "2024-03");
//!
//! // The partner commission rate defaults to 25% of gross revenue
//! assert!((ReportConfig::default().commission_rate - 0.25).abs() < 1e-12);
//! # let _ = summarize(&[], &[], &ReportConfig::default());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use rapido_core::Money` instead of
// `use rapido_core::money::Money`.

pub use error::ValidationError;
pub use money::Money;
pub use report::{DateRange, MonthlyReport, ReportConfig};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum value accepted for a general (ad-hoc) expense, in centavos.
///
/// ## Business Reason
/// R$ 1.000.000,00 is far above anything a single car wash spends in
/// one entry; larger values are assumed to be typos (an extra zero).
pub const MAX_EXPENSE_CENTS: i64 = 100_000_000;

/// Maximum value accepted for a single service, in centavos.
///
/// R$ 100.000,00 - an order of magnitude above the priciest detailing
/// job, same typo-guard reasoning as [`MAX_EXPENSE_CENTS`].
pub const MAX_SERVICE_VALUE_CENTS: i64 = 10_000_000;

/// Maximum length of a free-text expense description, in characters.
///
/// Used especially for itemizing "Produtos" purchases
/// ("Detergente 20L, Cera Líquida...").
pub const MAX_DESCRIPTION_CHARS: usize = 500;

/// Partner commission: fraction of gross service revenue owed to the
/// business partner. The historical default; overridable per business
/// through [`report::ReportConfig`].
pub const DEFAULT_COMMISSION_RATE: f64 = 0.25;
