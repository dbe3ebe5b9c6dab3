//! # Member Repository
//!
//! Read-only access to business members. Provisioning lives elsewhere;
//! this layer only needs members to resolve the audit columns
//! (created by, paid by, finished by) into display names.

use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use std::collections::HashMap;

use rapido_core::Member;

use crate::error::DbResult;

/// Repository for member lookups.
#[derive(Debug, Clone)]
pub struct MemberRepository {
    pool: SqlitePool,
}

impl MemberRepository {
    /// Creates a new repository with the given pool.
    pub fn new(pool: SqlitePool) -> Self {
        MemberRepository { pool }
    }

    /// Lists all members of a business.
    pub async fn list(&self, business_id: &str) -> DbResult<Vec<Member>> {
        let members = sqlx::query_as::<_, Member>(
            r#"
            SELECT id, business_id, display_name, role
            FROM members
            WHERE business_id = ?
            ORDER BY display_name ASC
            "#,
        )
        .bind(business_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(members)
    }

    /// Resolves a batch of member IDs into display names.
    ///
    /// One query for the whole batch, not one per row: the history
    /// panel resolves every audit column of a month in a single call.
    /// Unknown IDs are simply absent from the result map.
    pub async fn display_names(&self, ids: &[String]) -> DbResult<HashMap<String, String>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT id, display_name FROM members WHERE id IN (");
        let mut separated = builder.separated(", ");
        for id in ids {
            separated.push_bind(id);
        }
        separated.push_unseparated(")");

        let rows: Vec<(String, String)> = builder.build_query_as().fetch_all(&self.pool).await?;

        Ok(rows.into_iter().collect())
    }
}

// =============================================================================
// Integration Tests
// =============================================================================
