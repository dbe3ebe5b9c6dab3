//! # Service Repository
//!
//! The daily car-wash ledger: one row per car washed.
//!
//! Finishing a service follows the same one-way discipline as expense
//! payment: `UPDATE ... WHERE status = 'pendente'`, so a service can
//! be finished at most once.

use chrono::{NaiveDate, Utc};
use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;

use rapido_core::validation::validate_new_service;
use rapido_core::{DateRange, NewService, Service};

use crate::error::{DbError, DbResult};

const SERVICE_COLUMNS: &str = r#"
    id, business_id, client_name, client_phone, car_plate,
    car_make_model, car_color, service_name, vehicle_type,
    value_cents, status, date, created_by_member_id,
    finished_by_member_id, created_at
"#;

/// Repository for daily services.
#[derive(Debug, Clone)]
pub struct ServiceRepository {
    pool: SqlitePool,
}

impl ServiceRepository {
    /// Creates a new repository with the given pool.
    pub fn new(pool: SqlitePool) -> Self {
        ServiceRepository { pool }
    }

    /// Records a new service in the queue (status `pendente`).
    ///
    /// The form input is validated first (contact and vehicle fields,
    /// value bounds); nothing is written on a violation.
    pub async fn add(&self, business_id: &str, service: &NewService) -> DbResult<Service> {
        validate_new_service(service)?;

        let id = Uuid::new_v4().to_string();

        sqlx::query(
            r#"
            INSERT INTO services
                (id, business_id, client_name, client_phone, car_plate,
                 car_make_model, car_color, service_name, vehicle_type,
                 value_cents, status, date, created_by_member_id,
                 finished_by_member_id, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, 'pendente', ?, ?, NULL, ?)
            "#,
        )
        .bind(&id)
        .bind(business_id)
        .bind(&service.client_name)
        .bind(&service.client_phone)
        .bind(&service.car_plate)
        .bind(&service.car_make_model)
        .bind(&service.car_color)
        .bind(&service.service_name)
        .bind(&service.vehicle_type)
        .bind(service.value.cents())
        .bind(service.date)
        .bind(&service.created_by_member_id)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        info!(
            service_id = %id,
            client = %service.client_name,
            value = %service.value,
            "Service recorded"
        );

        self.get_by_id(&id).await
    }

    /// Marks a pending service as finished (car ready for pickup).
    ///
    /// One-way: a second call on the same service is rejected with
    /// [`DbError::AlreadyFinished`].
    pub async fn finish(
        &self,
        service_id: &str,
        finished_by_member_id: Option<&str>,
    ) -> DbResult<Service> {
        let result = sqlx::query(
            r#"
            UPDATE services
            SET status = 'finalizado',
                finished_by_member_id = ?
            WHERE id = ? AND status = 'pendente'
            "#,
        )
        .bind(finished_by_member_id)
        .bind(service_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            let existing = self.find_by_id(service_id).await?;
            return match existing {
                Some(_) => Err(DbError::AlreadyFinished {
                    id: service_id.to_string(),
                }),
                None => Err(DbError::not_found("Service", service_id)),
            };
        }

        info!(service_id, "Service finished");

        self.get_by_id(service_id).await
    }

    /// Fetches a single service by ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Service> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| DbError::not_found("Service", id))
    }

    async fn find_by_id(&self, id: &str) -> DbResult<Option<Service>> {
        let service = sqlx::query_as::<_, Service>(&format!(
            r#"
            SELECT {SERVICE_COLUMNS}
            FROM services
            WHERE id = ?
            "#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(service)
    }

    /// Lists the queue for a single day, oldest entry first.
    pub async fn list_for_date(&self, business_id: &str, date: NaiveDate) -> DbResult<Vec<Service>> {
        let services = sqlx::query_as::<_, Service>(&format!(
            r#"
            SELECT {SERVICE_COLUMNS}
            FROM services
            WHERE business_id = ? AND date = ?
            ORDER BY created_at ASC
            "#
        ))
        .bind(business_id)
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        Ok(services)
    }

    /// Lists all services in a date range (inclusive), newest day
    /// first, for the history panel and the report aggregation.
    ///
    /// Includes pending AND finished services: every recorded wash
    /// counts as revenue.
    pub async fn list_range(&self, business_id: &str, range: &DateRange) -> DbResult<Vec<Service>> {
        let services = sqlx::query_as::<_, Service>(&format!(
            r#"
            SELECT {SERVICE_COLUMNS}
            FROM services
            WHERE business_id = ? AND date BETWEEN ? AND ?
            ORDER BY date DESC, created_at ASC
            "#
        ))
        .bind(business_id)
        .bind(range.start)
        .bind(range.end)
        .fetch_all(&self.pool)
        .await?;

        Ok(services)
    }
}

// =============================================================================
// Integration Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use rapido_core::{Money, ServiceStatus};

    async fn test_db() -> Database {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        // Audit columns reference members(id); provision the members
        // the tests name so the foreign keys resolve.
        for (id, name, role) in [("m-owner", "Owner", "owner"), ("m-partner", "Partner", "partner")] {
            sqlx::query(
                "INSERT INTO members (id, business_id, display_name, role) VALUES (?, 'biz-1', ?, ?)",
            )
            .bind(id)
            .bind(name)
            .bind(role)
            .execute(db.pool())
            .await
            .unwrap();
        }
        db
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn new_service(client: &str, cents: i64, day: NaiveDate) -> NewService {
        NewService {
            client_name: client.to_string(),
            client_phone: "(11) 98765-4321".to_string(),
            car_plate: "ABC1D23".to_string(),
            car_make_model: "Fiat Uno".to_string(),
            car_color: Some("Prata".to_string()),
            service_name: "Lavagem Completa".to_string(),
            vehicle_type: "SEDAN".to_string(),
            value: Money::from_cents(cents),
            date: day,
            created_by_member_id: Some("m-owner".to_string()),
        }
    }

    #[tokio::test]
    async fn test_add_enters_queue_as_pending() {
        let db = test_db().await;
        let today = date(2024, 3, 10);

        let service = db
            .services()
            .add("biz-1", &new_service("João", 5000, today))
            .await
            .unwrap();

        assert_eq!(service.status, ServiceStatus::Pendente);
        assert_eq!(service.value_cents, 5000);
        assert_eq!(service.date, today);
        assert_eq!(service.finished_by_member_id, None);
    }

    #[tokio::test]
    async fn test_add_persists_contact_and_vehicle_fields() {
        let db = test_db().await;

        let service = db
            .services()
            .add("biz-1", &new_service("João", 5000, date(2024, 3, 10)))
            .await
            .unwrap();

        assert_eq!(service.client_phone, "(11) 98765-4321");
        assert_eq!(service.car_make_model, "Fiat Uno");
        assert_eq!(service.car_color, Some("Prata".to_string()));

        let mut no_color = new_service("Maria", 7000, date(2024, 3, 10));
        no_color.car_color = None;
        let service = db.services().add("biz-1", &no_color).await.unwrap();
        assert_eq!(service.car_color, None);
    }

    #[tokio::test]
    async fn test_add_rejects_missing_phone() {
        let db = test_db().await;

        let mut draft = new_service("João", 5000, date(2024, 3, 10));
        draft.client_phone = String::new();

        let err = db.services().add("biz-1", &draft).await.unwrap_err();
        assert_eq!(err.to_string(), "client_phone is required");

        // Nothing was written
        let queue = db
            .services()
            .list_for_date("biz-1", date(2024, 3, 10))
            .await
            .unwrap();
        assert!(queue.is_empty());
    }

    #[tokio::test]
    async fn test_finish_is_one_way() {
        let db = test_db().await;
        let today = date(2024, 3, 10);

        let service = db
            .services()
            .add("biz-1", &new_service("João", 5000, today))
            .await
            .unwrap();

        let finished = db
            .services()
            .finish(&service.id, Some("m-partner"))
            .await
            .unwrap();
        assert_eq!(finished.status, ServiceStatus::Finalizado);
        assert_eq!(finished.finished_by_member_id, Some("m-partner".to_string()));

        let err = db.services().finish(&service.id, None).await.unwrap_err();
        assert!(matches!(err, DbError::AlreadyFinished { .. }));

        // The original finisher is preserved
        let after = db.services().get_by_id(&service.id).await.unwrap();
        assert_eq!(after.finished_by_member_id, Some("m-partner".to_string()));
    }

    #[tokio::test]
    async fn test_finish_unknown_service_is_not_found() {
        let db = test_db().await;
        let err = db.services().finish("ghost", None).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_for_date_is_day_scoped() {
        let db = test_db().await;
        let services = db.services();

        services.add("biz-1", &new_service("João", 5000, date(2024, 3, 10))).await.unwrap();
        services.add("biz-1", &new_service("Maria", 7000, date(2024, 3, 10))).await.unwrap();
        services.add("biz-1", &new_service("Pedro", 4000, date(2024, 3, 11))).await.unwrap();

        let day = services.list_for_date("biz-1", date(2024, 3, 10)).await.unwrap();
        assert_eq!(day.len(), 2);
        assert_eq!(day[0].client_name, "João");
        assert_eq!(day[1].client_name, "Maria");
    }

    #[tokio::test]
    async fn test_list_range_includes_pending_and_finished() {
        let db = test_db().await;
        let services = db.services();

        let a = services.add("biz-1", &new_service("João", 5000, date(2024, 3, 10))).await.unwrap();
        services.add("biz-1", &new_service("Maria", 7000, date(2024, 3, 12))).await.unwrap();
        services.finish(&a.id, None).await.unwrap();

        let range = DateRange::new(Some(date(2024, 3, 1)), Some(date(2024, 3, 31))).unwrap();
        let all = services.list_range("biz-1", &range).await.unwrap();

        // Both statuses appear, newest day first
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].client_name, "Maria");
        assert_eq!(all[1].client_name, "João");
    }
}
