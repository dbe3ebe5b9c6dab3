//! # Expense Repository
//!
//! The monthly expense ledger: recurring bills materialized from
//! templates, plus ad-hoc entries recorded directly from the form.
//!
//! ## Recurring Generation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │              ensure_recurring(business, month, today)               │
//! │                                                                     │
//! │  month != month-of-today ──────────────► no-op (0 created)         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  for each template with available_day <= today.day():              │
//! │       INSERT OR IGNORE (id, type, month, 'pendente', ...)          │
//! │                  │                                                  │
//! │                  ▼                                                  │
//! │  uniq_expenses_recurring (business, type, month) swallows the      │
//! │  duplicate: a concurrent second caller inserts 0 rows and both     │
//! │  calls succeed. Idempotent by construction.                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Payment Is One-Way
//! `pay()` writes with `WHERE status = 'pendente'`. Zero rows affected
//! means the expense either doesn't exist or was already paid; the
//! second payment attempt is rejected, never re-applied.

use chrono::{Datelike, NaiveDate, Utc};
use sqlx::SqlitePool;
use tracing::{debug, info};
use uuid::Uuid;

use rapido_core::validation::{validate_adhoc_draft, validate_payment};
use rapido_core::{
    AdHocExpenseDraft, DateRange, Expense, ExpensePayment, ExpenseStatus, MonthKey,
};

use crate::error::{DbError, DbResult};

const EXPENSE_COLUMNS: &str = r#"
    id, business_id, expense_type_id, name, category, month_year,
    is_recurring, status, due_date, amount_paid_cents, paid_at,
    description, created_by_member_id, paid_by_member_id, created_at
"#;

/// Repository for the expense ledger.
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    pool: SqlitePool,
}

impl ExpenseRepository {
    /// Creates a new repository with the given pool.
    pub fn new(pool: SqlitePool) -> Self {
        ExpenseRepository { pool }
    }

    // =========================================================================
    // Recurring Generation
    // =========================================================================

    /// Materializes the month's recurring bills that have become
    /// available, returning how many rows were actually created.
    ///
    /// ## Rules
    /// - Only the month `today` falls in is ever generated: browsing a
    ///   past or future month is read-only
    /// - A template participates only once `today.day() >= available_day`
    /// - Safe to call concurrently and repeatedly: the unique index on
    ///   (business, type, month) turns duplicates into no-ops
    pub async fn ensure_recurring(
        &self,
        business_id: &str,
        month: &MonthKey,
        today: NaiveDate,
    ) -> DbResult<u64> {
        if *month != MonthKey::from_date(today) {
            debug!(%month, "Skipping recurring generation for non-current month");
            return Ok(0);
        }

        let day = today.day() as i64;
        let created_at = Utc::now();

        // One statement per template so each row gets its own UUID.
        // OR IGNORE means a row that lost the race counts as 0.
        let templates: Vec<(String, String)> = sqlx::query_as(
            r#"
            SELECT id, name
            FROM expense_types
            WHERE business_id = ? AND available_day <= ?
            "#,
        )
        .bind(business_id)
        .bind(day)
        .fetch_all(&self.pool)
        .await?;

        let mut created = 0u64;
        for (type_id, name) in &templates {
            let result = sqlx::query(
                r#"
                INSERT OR IGNORE INTO expenses
                    (id, business_id, expense_type_id, name, category,
                     month_year, is_recurring, status, due_date,
                     amount_paid_cents, paid_at, description,
                     created_by_member_id, paid_by_member_id, created_at)
                VALUES (?, ?, ?, ?, NULL, ?, 1, 'pendente', NULL,
                        NULL, NULL, NULL, NULL, NULL, ?)
                "#,
            )
            .bind(Uuid::new_v4().to_string())
            .bind(business_id)
            .bind(type_id)
            .bind(name)
            .bind(month)
            .bind(created_at)
            .execute(&self.pool)
            .await?;

            created += result.rows_affected();
        }

        if created > 0 {
            info!(business_id, %month, created, "Recurring expenses materialized");
        }

        Ok(created)
    }

    // =========================================================================
    // Ad-hoc Entry
    // =========================================================================

    /// Records an ad-hoc expense from the form.
    ///
    /// The draft is validated first (amount range, description length,
    /// due date presence); nothing is written on a violation. A draft
    /// submitted as "já paguei" lands directly in `pago` with `today`
    /// as its payment date.
    ///
    /// ## Behavior Note
    /// For a pending draft the entered amount is validated and then
    /// discarded: the real amount is captured at payment time.
    pub async fn add_adhoc(
        &self,
        business_id: &str,
        draft: &AdHocExpenseDraft,
        today: NaiveDate,
        created_by_member_id: Option<&str>,
    ) -> DbResult<Expense> {
        let validated = validate_adhoc_draft(draft)?;

        let id = Uuid::new_v4().to_string();
        let month = MonthKey::from_date(today);
        let name = validated.category.as_str();

        let (amount_paid_cents, paid_at, paid_by) = match validated.status {
            ExpenseStatus::Pago => (
                Some(validated.amount.cents()),
                Some(today),
                created_by_member_id,
            ),
            ExpenseStatus::Pendente => (None, None, None),
        };

        sqlx::query(
            r#"
            INSERT INTO expenses
                (id, business_id, expense_type_id, name, category,
                 month_year, is_recurring, status, due_date,
                 amount_paid_cents, paid_at, description,
                 created_by_member_id, paid_by_member_id, created_at)
            VALUES (?, ?, NULL, ?, ?, ?, 0, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(business_id)
        .bind(name)
        .bind(validated.category)
        .bind(&month)
        .bind(validated.status)
        .bind(validated.due_date)
        .bind(amount_paid_cents)
        .bind(paid_at)
        .bind(&validated.description)
        .bind(created_by_member_id)
        .bind(paid_by)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        info!(
            expense_id = %id,
            category = name,
            status = validated.status.as_str(),
            "Ad-hoc expense recorded"
        );

        self.get_by_id(&id).await
    }

    // =========================================================================
    // Payment
    // =========================================================================

    /// Registers the payment of a pending expense.
    ///
    /// The transition is enforced in the WHERE clause: if the row is
    /// already `pago` (or doesn't exist) zero rows are affected and the
    /// attempt is rejected, so a second submit can never overwrite the
    /// recorded amount.
    pub async fn pay(&self, expense_id: &str, payment: &ExpensePayment) -> DbResult<Expense> {
        validate_payment(payment)?;

        let result = sqlx::query(
            r#"
            UPDATE expenses
            SET status            = 'pago',
                amount_paid_cents = ?,
                paid_at           = ?,
                description       = COALESCE(?, description),
                paid_by_member_id = ?
            WHERE id = ? AND status = 'pendente'
            "#,
        )
        .bind(payment.amount_paid.cents())
        .bind(payment.paid_at)
        .bind(&payment.description)
        .bind(&payment.paid_by_member_id)
        .bind(expense_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            // Distinguish "already paid" from "no such expense"
            let existing = self.find_by_id(expense_id).await?;
            return match existing {
                Some(_) => Err(DbError::AlreadyPaid {
                    id: expense_id.to_string(),
                }),
                None => Err(DbError::not_found("Expense", expense_id)),
            };
        }

        info!(
            expense_id,
            amount = %payment.amount_paid,
            "Expense paid"
        );

        self.get_by_id(expense_id).await
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Lists a month's expenses: recurring bills first, then ad-hoc,
    /// each group alphabetical. Read-only; call [`ensure_recurring`]
    /// first when viewing the current month.
    ///
    /// [`ensure_recurring`]: ExpenseRepository::ensure_recurring
    pub async fn list(&self, business_id: &str, month: &MonthKey) -> DbResult<Vec<Expense>> {
        let expenses = sqlx::query_as::<_, Expense>(&format!(
            r#"
            SELECT {EXPENSE_COLUMNS}
            FROM expenses
            WHERE business_id = ? AND month_year = ?
            ORDER BY is_recurring DESC, name ASC
            "#
        ))
        .bind(business_id)
        .bind(month)
        .fetch_all(&self.pool)
        .await?;

        Ok(expenses)
    }

    /// Fetches a single expense by ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Expense> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| DbError::not_found("Expense", id))
    }

    async fn find_by_id(&self, id: &str) -> DbResult<Option<Expense>> {
        let expense = sqlx::query_as::<_, Expense>(&format!(
            r#"
            SELECT {EXPENSE_COLUMNS}
            FROM expenses
            WHERE id = ?
            "#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(expense)
    }

    /// Lists expenses PAID within a date range (inclusive), for the
    /// report aggregation. Pending expenses never appear here.
    pub async fn list_paid_in_range(
        &self,
        business_id: &str,
        range: &DateRange,
    ) -> DbResult<Vec<Expense>> {
        let expenses = sqlx::query_as::<_, Expense>(&format!(
            r#"
            SELECT {EXPENSE_COLUMNS}
            FROM expenses
            WHERE business_id = ?
              AND status = 'pago'
              AND paid_at BETWEEN ? AND ?
            ORDER BY paid_at ASC, name ASC
            "#
        ))
        .bind(business_id)
        .bind(range.start)
        .bind(range.end)
        .fetch_all(&self.pool)
        .await?;

        Ok(expenses)
    }
}

// =============================================================================
// Integration Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use rapido_core::{ExpenseCategory, Money, ValidationError};

    async fn test_db() -> Database {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        // Audit columns reference members(id); provision the member
        // the tests name so the foreign keys resolve.
        sqlx::query(
            "INSERT INTO members (id, business_id, display_name, role) VALUES ('m-owner', 'biz-1', 'Owner', 'owner')",
        )
        .execute(db.pool())
        .await
        .unwrap();
        db
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    async fn seed_luz(db: &Database) -> rapido_core::ExpenseType {
        // Luz: R$ 150.00 default, available from the 5th, due on the 10th
        db.expense_types()
            .insert("biz-1", "Luz", Some(15000), 5, 10)
            .await
            .unwrap()
    }

    fn payment(cents: i64, paid_at: NaiveDate) -> ExpensePayment {
        ExpensePayment {
            amount_paid: Money::from_cents(cents),
            paid_at,
            description: None,
            paid_by_member_id: None,
        }
    }

    // -------------------------------------------------------------------------
    // Recurring generation
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_generation_waits_for_available_day() {
        let db = test_db().await;
        seed_luz(&db).await;

        let month: MonthKey = "2024-03".parse().unwrap();

        // March 4th: one day before Luz becomes available
        let created = db
            .expenses()
            .ensure_recurring("biz-1", &month, date(2024, 3, 4))
            .await
            .unwrap();
        assert_eq!(created, 0);
        assert!(db.expenses().list("biz-1", &month).await.unwrap().is_empty());

        // March 5th: available_day reached
        let created = db
            .expenses()
            .ensure_recurring("biz-1", &month, date(2024, 3, 5))
            .await
            .unwrap();
        assert_eq!(created, 1);

        let expenses = db.expenses().list("biz-1", &month).await.unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].name, "Luz");
        assert!(expenses[0].is_recurring);
        assert_eq!(expenses[0].status, ExpenseStatus::Pendente);
        assert_eq!(expenses[0].amount_paid_cents, None);
    }

    #[tokio::test]
    async fn test_generation_is_idempotent() {
        let db = test_db().await;
        seed_luz(&db).await;

        let month: MonthKey = "2024-03".parse().unwrap();
        let today = date(2024, 3, 10);

        let first = db.expenses().ensure_recurring("biz-1", &month, today).await.unwrap();
        let second = db.expenses().ensure_recurring("biz-1", &month, today).await.unwrap();
        let third = db.expenses().ensure_recurring("biz-1", &month, today).await.unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 0);
        assert_eq!(third, 0);
        assert_eq!(db.expenses().list("biz-1", &month).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_generation_creates_exactly_one() {
        let db = test_db().await;
        seed_luz(&db).await;

        let month: MonthKey = "2024-03".parse().unwrap();
        let today = date(2024, 3, 10);

        // Two panels open the expenses view at the same instant
        let a = db.expenses();
        let b = db.expenses();
        let (ra, rb) = tokio::join!(
            a.ensure_recurring("biz-1", &month, today),
            b.ensure_recurring("biz-1", &month, today),
        );

        // Both calls succeed; exactly one row exists in total
        assert_eq!(ra.unwrap() + rb.unwrap(), 1);
        assert_eq!(db.expenses().list("biz-1", &month).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_no_generation_for_other_months() {
        let db = test_db().await;
        seed_luz(&db).await;

        let today = date(2024, 3, 10);

        // Browsing February (past) or April (future) generates nothing,
        // no matter how late in the real month it is
        let past: MonthKey = "2024-02".parse().unwrap();
        let future: MonthKey = "2024-04".parse().unwrap();

        assert_eq!(db.expenses().ensure_recurring("biz-1", &past, today).await.unwrap(), 0);
        assert_eq!(db.expenses().ensure_recurring("biz-1", &future, today).await.unwrap(), 0);
        assert!(db.expenses().list("biz-1", &past).await.unwrap().is_empty());
        assert!(db.expenses().list("biz-1", &future).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_generation_per_template_availability() {
        let db = test_db().await;
        let types = db.expense_types();
        types.insert("biz-1", "Aluguel", Some(80000), 1, 5).await.unwrap();
        types.insert("biz-1", "Luz", Some(15000), 5, 10).await.unwrap();
        types.insert("biz-1", "Internet", Some(9900), 15, 20).await.unwrap();

        let month: MonthKey = "2024-03".parse().unwrap();

        // On the 7th only Aluguel (1st) and Luz (5th) are available
        let created = db
            .expenses()
            .ensure_recurring("biz-1", &month, date(2024, 3, 7))
            .await
            .unwrap();
        assert_eq!(created, 2);

        // On the 15th Internet joins; earlier rows are untouched
        let created = db
            .expenses()
            .ensure_recurring("biz-1", &month, date(2024, 3, 15))
            .await
            .unwrap();
        assert_eq!(created, 1);

        let names: Vec<_> = db
            .expenses()
            .list("biz-1", &month)
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["Aluguel", "Internet", "Luz"]);
    }

    // -------------------------------------------------------------------------
    // Payment
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_pay_recurring_expense() {
        // Luz generated on the 5th, paid R$ 145.50 on the 10th
        let db = test_db().await;
        seed_luz(&db).await;

        let month: MonthKey = "2024-03".parse().unwrap();
        db.expenses()
            .ensure_recurring("biz-1", &month, date(2024, 3, 5))
            .await
            .unwrap();

        let luz = db.expenses().list("biz-1", &month).await.unwrap().remove(0);
        let paid = db
            .expenses()
            .pay(&luz.id, &payment(14550, date(2024, 3, 10)))
            .await
            .unwrap();

        assert_eq!(paid.status, ExpenseStatus::Pago);
        assert_eq!(paid.amount_paid_cents, Some(14550));
        assert_eq!(paid.paid_at, Some(date(2024, 3, 10)));
    }

    #[tokio::test]
    async fn test_payment_is_one_way() {
        let db = test_db().await;
        seed_luz(&db).await;

        let month: MonthKey = "2024-03".parse().unwrap();
        db.expenses()
            .ensure_recurring("biz-1", &month, date(2024, 3, 5))
            .await
            .unwrap();
        let luz = db.expenses().list("biz-1", &month).await.unwrap().remove(0);

        db.expenses()
            .pay(&luz.id, &payment(14550, date(2024, 3, 10)))
            .await
            .unwrap();

        // Second attempt with a different amount is rejected...
        let err = db
            .expenses()
            .pay(&luz.id, &payment(99999, date(2024, 3, 11)))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::AlreadyPaid { .. }));

        // ...and the recorded payment is untouched
        let after = db.expenses().get_by_id(&luz.id).await.unwrap();
        assert_eq!(after.amount_paid_cents, Some(14550));
        assert_eq!(after.paid_at, Some(date(2024, 3, 10)));
    }

    #[tokio::test]
    async fn test_pay_unknown_expense_is_not_found() {
        let db = test_db().await;
        let err = db
            .expenses()
            .pay("ghost", &payment(100, date(2024, 3, 10)))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_pay_rejects_non_positive_amount() {
        let db = test_db().await;
        seed_luz(&db).await;

        let month: MonthKey = "2024-03".parse().unwrap();
        db.expenses()
            .ensure_recurring("biz-1", &month, date(2024, 3, 5))
            .await
            .unwrap();
        let luz = db.expenses().list("biz-1", &month).await.unwrap().remove(0);

        let err = db
            .expenses()
            .pay(&luz.id, &payment(0, date(2024, 3, 10)))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DbError::Validation(ValidationError::MustBePositive { .. })
        ));

        // Still pending
        let after = db.expenses().get_by_id(&luz.id).await.unwrap();
        assert_eq!(after.status, ExpenseStatus::Pendente);
    }

    // -------------------------------------------------------------------------
    // Ad-hoc entries
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_adhoc_paid_lands_in_pago() {
        let db = test_db().await;

        let draft = AdHocExpenseDraft {
            value: "89.90".to_string(),
            category: ExpenseCategory::Produtos,
            description: Some("Detergente 20L, Cera Líquida".to_string()),
            status: ExpenseStatus::Pago,
            due_date: None,
        };
        let today = date(2024, 3, 12);
        let expense = db
            .expenses()
            .add_adhoc("biz-1", &draft, today, Some("m-owner"))
            .await
            .unwrap();

        assert_eq!(expense.name, "Produtos");
        assert_eq!(expense.category, Some(ExpenseCategory::Produtos));
        assert_eq!(expense.status, ExpenseStatus::Pago);
        assert_eq!(expense.amount_paid_cents, Some(8990));
        assert_eq!(expense.paid_at, Some(today));
        assert_eq!(expense.paid_by_member_id, Some("m-owner".to_string()));
        assert!(!expense.is_recurring);
        assert_eq!(expense.month_year.as_str(), "2024-03");
    }

    #[tokio::test]
    async fn test_adhoc_pending_discards_entered_amount() {
        let db = test_db().await;

        let draft = AdHocExpenseDraft {
            value: "300".to_string(),
            category: ExpenseCategory::Manutencao,
            description: None,
            status: ExpenseStatus::Pendente,
            due_date: Some(date(2024, 3, 25)),
        };
        let expense = db
            .expenses()
            .add_adhoc("biz-1", &draft, date(2024, 3, 12), None)
            .await
            .unwrap();

        // The amount is captured at payment time, not at entry
        assert_eq!(expense.status, ExpenseStatus::Pendente);
        assert_eq!(expense.amount_paid_cents, None);
        assert_eq!(expense.due_date, Some(date(2024, 3, 25)));

        // Paying later records the actual amount
        let paid = db
            .expenses()
            .pay(&expense.id, &payment(28000, date(2024, 3, 20)))
            .await
            .unwrap();
        assert_eq!(paid.amount_paid_cents, Some(28000));
    }

    #[tokio::test]
    async fn test_adhoc_pending_requires_due_date() {
        let db = test_db().await;

        let draft = AdHocExpenseDraft {
            value: "100".to_string(),
            category: ExpenseCategory::Outros,
            description: None,
            status: ExpenseStatus::Pendente,
            due_date: None,
        };
        let err = db
            .expenses()
            .add_adhoc("biz-1", &draft, date(2024, 3, 12), None)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "due_date is required");

        // Nothing was written
        let month: MonthKey = "2024-03".parse().unwrap();
        assert!(db.expenses().list("biz-1", &month).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_adhoc_amount_bounds_enforced() {
        let db = test_db().await;

        let mut draft = AdHocExpenseDraft {
            value: "2000000".to_string(),
            category: ExpenseCategory::Investimento,
            description: None,
            status: ExpenseStatus::Pago,
            due_date: None,
        };
        let today = date(2024, 3, 12);

        let err = db.expenses().add_adhoc("biz-1", &draft, today, None).await.unwrap_err();
        assert!(matches!(
            err,
            DbError::Validation(ValidationError::OutOfRange { .. })
        ));

        draft.value = "0".to_string();
        let err = db.expenses().add_adhoc("biz-1", &draft, today, None).await.unwrap_err();
        assert!(matches!(
            err,
            DbError::Validation(ValidationError::MustBePositive { .. })
        ));

        draft.value = "50000".to_string();
        let ok = db.expenses().add_adhoc("biz-1", &draft, today, None).await.unwrap();
        assert_eq!(ok.amount_paid_cents, Some(5_000_000));
    }

    // -------------------------------------------------------------------------
    // Listing
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_list_orders_recurring_first_then_name() {
        let db = test_db().await;
        let types = db.expense_types();
        types.insert("biz-1", "Luz", Some(15000), 1, 10).await.unwrap();
        types.insert("biz-1", "Aluguel", Some(80000), 1, 5).await.unwrap();

        let month: MonthKey = "2024-03".parse().unwrap();
        let today = date(2024, 3, 12);
        db.expenses().ensure_recurring("biz-1", &month, today).await.unwrap();

        for category in [ExpenseCategory::Produtos, ExpenseCategory::Alimentacao] {
            let draft = AdHocExpenseDraft {
                value: "50".to_string(),
                category,
                description: None,
                status: ExpenseStatus::Pago,
                due_date: None,
            };
            db.expenses().add_adhoc("biz-1", &draft, today, None).await.unwrap();
        }

        let names: Vec<_> = db
            .expenses()
            .list("biz-1", &month)
            .await
            .unwrap()
            .into_iter()
            .map(|e| (e.is_recurring, e.name))
            .collect();

        assert_eq!(
            names,
            vec![
                (true, "Aluguel".to_string()),
                (true, "Luz".to_string()),
                (false, "Alimentação".to_string()),
                (false, "Produtos".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_list_paid_in_range() {
        let db = test_db().await;
        let today = date(2024, 3, 12);

        // One paid in range, one paid outside, one still pending
        let paid = AdHocExpenseDraft {
            value: "100".to_string(),
            category: ExpenseCategory::Produtos,
            description: None,
            status: ExpenseStatus::Pago,
            due_date: None,
        };
        db.expenses().add_adhoc("biz-1", &paid, today, None).await.unwrap();
        db.expenses()
            .add_adhoc("biz-1", &paid, date(2024, 4, 2), None)
            .await
            .unwrap();

        let pending = AdHocExpenseDraft {
            status: ExpenseStatus::Pendente,
            due_date: Some(date(2024, 3, 30)),
            ..paid.clone()
        };
        db.expenses().add_adhoc("biz-1", &pending, today, None).await.unwrap();

        let range = DateRange::new(Some(date(2024, 3, 1)), Some(date(2024, 3, 31))).unwrap();
        let in_range = db.expenses().list_paid_in_range("biz-1", &range).await.unwrap();

        assert_eq!(in_range.len(), 1);
        assert_eq!(in_range[0].paid_at, Some(today));
    }
}
