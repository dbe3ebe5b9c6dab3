//! # Report Math
//!
//! Pure aggregation of services and paid expenses into financial
//! summaries. The storage layer fetches the rows; this module folds
//! them. Recomputed on every query - there is no cache to invalidate.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Report Computation                            │
//! │                                                                     │
//! │  services in [start, end]          expenses pago, paid_at in range  │
//! │          │                                   │                      │
//! │          ▼                                   ▼                      │
//! │   count ──► total_services      Σ amount_paid ──► total_expenses    │
//! │   Σ value ──► revenue                                               │
//! │          │                                   │                      │
//! │          └───────────────┬───────────────────┘                      │
//! │                          ▼                                          │
//! │            profit = revenue - total_expenses                        │
//! │            partner_commission = revenue × rate (default 0.25)       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::types::{Expense, ExpenseStatus, Service};
use crate::DEFAULT_COMMISSION_RATE;

// =============================================================================
// Date Range
// =============================================================================

/// An inclusive date range `[start, end]`.
///
/// Both bounds are inclusive; storage compares the fixed-width
/// "YYYY-MM-DD" keys lexicographically, which matches chronological
/// order exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Builds a range from the history form's two optional inputs.
    ///
    /// Fails with a `ValidationError` when either date is missing -
    /// the arbitrary-range report requires both.
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> ValidationResult<Self> {
        let start = start.ok_or_else(|| ValidationError::required("start_date"))?;
        let end = end.ok_or_else(|| ValidationError::required("end_date"))?;
        Ok(DateRange { start, end })
    }

    /// The calendar month containing `today`: first day through last day.
    ///
    /// Used by the eager "current month to date" report.
    pub fn month_of(today: NaiveDate) -> Self {
        let start = today.with_day(1).expect("day 1 always exists");
        let end = match start.month() {
            12 => NaiveDate::from_ymd_opt(start.year() + 1, 1, 1),
            m => NaiveDate::from_ymd_opt(start.year(), m + 1, 1),
        }
        .expect("first of next month always exists")
        .pred_opt()
        .expect("last day of month always exists");

        DateRange { start, end }
    }

    /// Whether the range contains the given date (inclusive).
    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

// =============================================================================
// Report Configuration
// =============================================================================

/// Per-business report parameters.
///
/// Historically the commission rate was a literal baked into the
/// history screen; it is lifted here so a business can override it
/// while today's default (25% of gross revenue) is preserved.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Fraction of gross service revenue owed to the partner.
    pub commission_rate: f64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            commission_rate: DEFAULT_COMMISSION_RATE,
        }
    }
}

// =============================================================================
// Monthly Report
// =============================================================================

/// A derived financial summary over a date range. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyReport {
    /// Number of services in range (any status).
    pub total_services: usize,
    /// Gross service revenue in range.
    pub revenue: Money,
    /// Sum of amounts paid on expenses paid within the range.
    pub total_expenses: Money,
    /// revenue - total_expenses (may be negative).
    pub profit: Money,
    /// revenue × commission_rate, in reais. Kept as f64 because the
    /// derived figure can carry sub-centavo precision
    /// (R$ 245,50 × 0.25 = R$ 61,375).
    pub partner_commission: f64,
}

/// Folds fetched rows into a [`MonthlyReport`].
///
/// ## Contract
/// - `services`: every service in the range, regardless of status
/// - `paid_expenses`: expenses with status `pago` whose `paid_at`
///   falls in the range; unpaid rows are skipped defensively and a
///   missing `amount_paid` counts as zero
///
/// ## Example
/// ```rust
/// use rapido_core::report::{summarize, ReportConfig};
///
/// let report = summarize(&[], &[], &ReportConfig::default());
/// assert_eq!(report.total_services, 0);
/// assert!(report.revenue.is_zero());
/// assert_eq!(report.partner_commission, 0.0);
/// ```
pub fn summarize(
    services: &[Service],
    paid_expenses: &[Expense],
    config: &ReportConfig,
) -> MonthlyReport {
    let total_services = services.len();
    let revenue: Money = services.iter().map(Service::value).sum();

    let total_expenses: Money = paid_expenses
        .iter()
        .filter(|e| e.status == ExpenseStatus::Pago)
        .map(Expense::amount_paid)
        .sum();

    MonthlyReport {
        total_services,
        revenue,
        total_expenses,
        profit: revenue - total_expenses,
        partner_commission: revenue.reais() * config.commission_rate,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
