//! # Report Service
//!
//! Fetch-then-fold reporting: the repositories fetch the rows for a
//! range, rapido-core does the arithmetic. Reports are always derived
//! on demand; nothing is persisted or cached.

use chrono::NaiveDate;
use tracing::debug;

use rapido_core::report::summarize;
use rapido_core::{DateRange, MonthlyReport, ReportConfig};

use crate::error::DbResult;
use crate::pool::Database;

/// Financial report aggregation over the service and expense ledgers.
#[derive(Debug, Clone)]
pub struct Reports {
    db: Database,
    config: ReportConfig,
}

impl Reports {
    /// Creates a report service with the default configuration
    /// (25% partner commission).
    pub fn new(db: Database) -> Self {
        Reports {
            db,
            config: ReportConfig::default(),
        }
    }

    /// Creates a report service with a per-business configuration.
    pub fn with_config(db: Database, config: ReportConfig) -> Self {
        Reports { db, config }
    }

    /// Summarizes an arbitrary inclusive date range (history panel).
    ///
    /// Revenue counts every service in the range regardless of status;
    /// expenses count only what was PAID within the range, keyed by
    /// `paid_at` rather than by accounting month.
    pub async fn summary(&self, business_id: &str, range: &DateRange) -> DbResult<MonthlyReport> {
        debug!(
            business_id,
            start = %range.start,
            end = %range.end,
            "Computing range report"
        );

        let services = self.db.services().list_range(business_id, range).await?;
        let expenses = self
            .db
            .expenses()
            .list_paid_in_range(business_id, range)
            .await?;

        Ok(summarize(&services, &expenses, &self.config))
    }

    /// Summarizes the calendar month `today` falls in (dashboard).
    pub async fn current_month(
        &self,
        business_id: &str,
        today: NaiveDate,
    ) -> DbResult<MonthlyReport> {
        let range = DateRange::month_of(today);
        self.summary(business_id, &range).await
    }
}

// =============================================================================
// Integration Tests
// =============================================================================
