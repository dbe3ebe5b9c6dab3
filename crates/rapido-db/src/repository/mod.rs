//! # Repository Modules
//!
//! One repository per aggregate. Each wraps the shared `SqlitePool`
//! and exposes the operations the panels need, nothing more.
//!
//! ## Pattern
//! ```text
//! Repository (this layer)          rapido-core (pure)
//! ───────────────────────          ──────────────────
//! owns the SQL                     owns the rules
//! binds parameters                 validates input
//! maps rows to core types          computes totals
//! enforces transitions in WHERE    defines the enums
//! ```

pub mod expense;
pub mod expense_type;
pub mod member;
pub mod service;
pub mod service_price;
