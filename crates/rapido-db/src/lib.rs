//! # rapido-db - Database Layer
//!
//! SQLite persistence for Rápido POS using sqlx.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          rapido-db                                  │
//! │                                                                     │
//! │  ┌───────────────┐      ┌──────────────────────────────────────┐   │
//! │  │   Database    │      │          Repositories                │   │
//! │  │  ───────────  │      │  ──────────────────────────────────  │   │
//! │  │  SqlitePool   │─────►│  ExpenseTypeRepository  (templates)  │   │
//! │  │  WAL mode     │      │  ExpenseRepository      (the ledger) │   │
//! │  │  migrations   │      │  ServiceRepository      (daily queue)│   │
//! │  └───────────────┘      │  ServicePriceRepository (price grid) │   │
//! │          │              │  MemberRepository       (audit names)│   │
//! │          ▼              └──────────────────────────────────────┘   │
//! │  ┌───────────────┐                      │                          │
//! │  │    Reports    │◄─────────────────────┘                          │
//! │  │  aggregation  │   reads services + paid expenses,               │
//! │  └───────────────┘   delegates the math to rapido-core             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency Discipline
//! The two races that matter are both settled in SQL, not in Rust:
//! - recurring generation: a UNIQUE partial index plus `INSERT OR
//!   IGNORE` makes concurrent generation idempotent
//! - one-way transitions: `UPDATE ... WHERE status = 'pendente'`
//!   guarantees at most one payment / finish ever lands
//!
//! ## Usage
//! ```rust,ignore
//! use rapido_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("./rapido.db")).await?;
//! let month = MonthKey::from_date(today);
//! db.expenses().ensure_recurring("biz-1", &month, today).await?;
//! ```

pub mod error;
pub mod migrations;
pub mod pool;
pub mod report;
pub mod repository;

// Re-export main types for convenience
pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use report::Reports;
pub use repository::expense::ExpenseRepository;
pub use repository::expense_type::ExpenseTypeRepository;
pub use repository::member::MemberRepository;
pub use repository::service::ServiceRepository;
pub use repository::service_price::ServicePriceRepository;

// Re-export core types that appear in this crate's public signatures
pub use rapido_core::{
    AdHocExpenseDraft, DateRange, Expense, ExpenseCategory, ExpensePayment, ExpenseStatus,
    ExpenseType, ExpenseTypeUpdate, Member, MonthKey, MonthlyReport, Money, NewService,
    ReportConfig, Service, ServicePrice, ServiceStatus,
};
