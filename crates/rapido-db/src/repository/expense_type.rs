//! # Expense Type Repository
//!
//! Persistence for recurring-bill templates (rent, electricity, ...).
//!
//! Templates are provisioned once per business; afterwards the admin
//! screen only touches the three tunable fields (default value and the
//! two day-of-month settings). Nothing here deletes a template.

use sqlx::SqlitePool;
use tracing::{debug, info};
use uuid::Uuid;

use rapido_core::validation::validate_day_of_month;
use rapido_core::{ExpenseType, ExpenseTypeUpdate};

use crate::error::{DbError, DbResult};

/// Repository for expense type templates.
#[derive(Debug, Clone)]
pub struct ExpenseTypeRepository {
    pool: SqlitePool,
}

impl ExpenseTypeRepository {
    /// Creates a new repository with the given pool.
    pub fn new(pool: SqlitePool) -> Self {
        ExpenseTypeRepository { pool }
    }

    /// Lists all templates of a business, ordered by name.
    pub async fn list(&self, business_id: &str) -> DbResult<Vec<ExpenseType>> {
        debug!(business_id, "Listing expense types");

        let types = sqlx::query_as::<_, ExpenseType>(
            r#"
            SELECT id, business_id, name, is_fixed, default_value_cents,
                   available_day, due_day
            FROM expense_types
            WHERE business_id = ?
            ORDER BY name ASC
            "#,
        )
        .bind(business_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(types)
    }

    /// Fetches a single template by ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<ExpenseType> {
        sqlx::query_as::<_, ExpenseType>(
            r#"
            SELECT id, business_id, name, is_fixed, default_value_cents,
                   available_day, due_day
            FROM expense_types
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("ExpenseType", id))
    }

    /// Applies a partial update to a template (admin screen).
    ///
    /// `None` fields are left untouched via COALESCE. Day fields are
    /// range-checked into [1, 31] first; available_day and due_day are
    /// deliberately NOT cross-validated against each other.
    ///
    /// Already-generated expense instances are unaffected: the update
    /// only changes what future months materialize.
    pub async fn update(&self, id: &str, update: ExpenseTypeUpdate) -> DbResult<ExpenseType> {
        if let Some(day) = update.available_day {
            validate_day_of_month("available_day", day)?;
        }
        if let Some(day) = update.due_day {
            validate_day_of_month("due_day", day)?;
        }

        let result = sqlx::query(
            r#"
            UPDATE expense_types
            SET default_value_cents = COALESCE(?, default_value_cents),
                available_day       = COALESCE(?, available_day),
                due_day             = COALESCE(?, due_day)
            WHERE id = ?
            "#,
        )
        .bind(update.default_value_cents)
        .bind(update.available_day)
        .bind(update.due_day)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("ExpenseType", id));
        }

        info!(expense_type_id = id, "Expense type updated");

        self.get_by_id(id).await
    }

    /// Inserts a new template. Used by provisioning and the seed
    /// binary, not by the day-to-day panels.
    pub async fn insert(
        &self,
        business_id: &str,
        name: &str,
        default_value_cents: Option<i64>,
        available_day: i64,
        due_day: i64,
    ) -> DbResult<ExpenseType> {
        validate_day_of_month("available_day", available_day)?;
        validate_day_of_month("due_day", due_day)?;

        let id = Uuid::new_v4().to_string();
        let is_fixed = default_value_cents.is_some();

        sqlx::query(
            r#"
            INSERT INTO expense_types
                (id, business_id, name, is_fixed, default_value_cents,
                 available_day, due_day)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(business_id)
        .bind(name)
        .bind(is_fixed)
        .bind(default_value_cents)
        .bind(available_day)
        .bind(due_day)
        .execute(&self.pool)
        .await?;

        info!(expense_type_id = %id, name, "Expense type created");

        self.get_by_id(&id).await
    }
}

// =============================================================================
// Integration Tests
// =============================================================================
