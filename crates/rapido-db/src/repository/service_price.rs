//! # Service Price Repository
//!
//! The admin price grid: one configured price per service/vehicle-type
//! combination. The grid is what the service form uses to pre-fill the
//! value for a wash.

use sqlx::SqlitePool;
use tracing::info;

use rapido_core::{Money, ServicePrice};

use crate::error::{DbError, DbResult};

/// Repository for the price grid.
#[derive(Debug, Clone)]
pub struct ServicePriceRepository {
    pool: SqlitePool,
}

impl ServicePriceRepository {
    /// Creates a new repository with the given pool.
    pub fn new(pool: SqlitePool) -> Self {
        ServicePriceRepository { pool }
    }

    /// Lists the full grid of a business, grouped by service name.
    pub async fn list(&self, business_id: &str) -> DbResult<Vec<ServicePrice>> {
        let prices = sqlx::query_as::<_, ServicePrice>(
            r#"
            SELECT business_id, service_name, vehicle_type, price_cents
            FROM service_prices
            WHERE business_id = ?
            ORDER BY service_name ASC, vehicle_type ASC
            "#,
        )
        .bind(business_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(prices)
    }

    /// Looks up one cell of the grid.
    pub async fn lookup(
        &self,
        business_id: &str,
        service_name: &str,
        vehicle_type: &str,
    ) -> DbResult<Money> {
        let price: Option<(i64,)> = sqlx::query_as(
            r#"
            SELECT price_cents
            FROM service_prices
            WHERE business_id = ? AND service_name = ? AND vehicle_type = ?
            "#,
        )
        .bind(business_id)
        .bind(service_name)
        .bind(vehicle_type)
        .fetch_optional(&self.pool)
        .await?;

        price
            .map(|(cents,)| Money::from_cents(cents))
            .ok_or_else(|| {
                DbError::not_found("ServicePrice", format!("{service_name}/{vehicle_type}"))
            })
    }

    /// Sets the price for one cell, creating it if absent (admin
    /// screen). An upsert: editing and first-time configuration are
    /// the same gesture.
    pub async fn set_price(
        &self,
        business_id: &str,
        service_name: &str,
        vehicle_type: &str,
        price: Money,
    ) -> DbResult<()> {
        sqlx::query(
            r#"
            INSERT INTO service_prices
                (business_id, service_name, vehicle_type, price_cents)
            VALUES (?, ?, ?, ?)
            ON CONFLICT (business_id, service_name, vehicle_type)
            DO UPDATE SET price_cents = excluded.price_cents
            "#,
        )
        .bind(business_id)
        .bind(service_name)
        .bind(vehicle_type)
        .bind(price.cents())
        .execute(&self.pool)
        .await?;

        info!(service_name, vehicle_type, price = %price, "Price configured");

        Ok(())
    }
}

// =============================================================================
// Integration Tests
// =============================================================================
