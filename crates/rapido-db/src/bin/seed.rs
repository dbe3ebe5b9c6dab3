//! # Database Seeder
//!
//! Populates a database with demo data for local development:
//! a business with two members, the default recurring-bill templates,
//! a small price grid, and a day of services.
//!
//! ## Usage
//! ```bash
//! cargo run --bin seed                       # seeds ./rapido.db
//! RAPIDO_DB=/tmp/demo.db cargo run --bin seed
//! ```

use chrono::{Local, NaiveDate};
use tracing::info;

use rapido_core::{
    AdHocExpenseDraft, ExpenseCategory, ExpenseStatus, Money, MonthKey, NewService,
};
use rapido_db::{Database, DbConfig, DbResult};

const BUSINESS_ID: &str = "demo-lava-rapido";

const OWNER_ID: &str = "member-carlos";
const PARTNER_ID: &str = "member-ana";

/// (name, default value in centavos, available_day, due_day)
const DEFAULT_EXPENSE_TYPES: &[(&str, Option<i64>, i64, i64)] = &[
    ("Aluguel", Some(120_000), 1, 5),
    ("Luz", Some(15_000), 5, 10),
    ("Água", Some(8_000), 10, 15),
    ("Internet", Some(9_900), 15, 20),
    ("Funcionário", Some(140_000), 1, 5),
];

/// (service name, vehicle type, price in centavos)
const DEFAULT_PRICES: &[(&str, &str, i64)] = &[
    ("Lavagem Simples", "SEDAN", 3_000),
    ("Lavagem Simples", "SUV", 4_000),
    ("Lavagem Simples", "MOTO", 1_500),
    ("Lavagem Completa", "SEDAN", 5_000),
    ("Lavagem Completa", "SUV", 6_500),
    ("Lavagem Completa", "MOTO", 2_500),
    ("Enceramento", "SEDAN", 8_000),
    ("Enceramento", "SUV", 9_500),
];

#[tokio::main]
async fn main() -> DbResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let path = std::env::var("RAPIDO_DB").unwrap_or_else(|_| "./rapido.db".to_string());
    info!(path, "Seeding demo database");

    let db = Database::new(DbConfig::new(&path)).await?;

    let today = Local::now().date_naive();

    seed_members(&db).await?;
    seed_expense_types(&db).await?;
    seed_prices(&db).await?;
    seed_services(&db, today).await?;
    seed_expenses(&db, today).await?;

    info!("Seed complete");
    db.close().await;
    Ok(())
}

async fn seed_members(db: &Database) -> DbResult<()> {
    // Members are provisioned externally in production; the seeder
    // inserts them directly.
    for (id, name, role) in [
        (OWNER_ID, "Carlos", "owner"),
        (PARTNER_ID, "Ana", "partner"),
    ] {
        sqlx::query(
            r#"
            INSERT OR IGNORE INTO members (id, business_id, display_name, role)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(BUSINESS_ID)
        .bind(name)
        .bind(role)
        .execute(db.pool())
        .await?;
    }
    info!("Members seeded");
    Ok(())
}

async fn seed_expense_types(db: &Database) -> DbResult<()> {
    let existing = db.expense_types().list(BUSINESS_ID).await?;
    if !existing.is_empty() {
        info!("Expense types already present, skipping");
        return Ok(());
    }

    for (name, default_value, available_day, due_day) in DEFAULT_EXPENSE_TYPES {
        db.expense_types()
            .insert(BUSINESS_ID, name, *default_value, *available_day, *due_day)
            .await?;
    }
    info!(count = DEFAULT_EXPENSE_TYPES.len(), "Expense types seeded");
    Ok(())
}

async fn seed_prices(db: &Database) -> DbResult<()> {
    for (service_name, vehicle_type, cents) in DEFAULT_PRICES {
        db.service_prices()
            .set_price(
                BUSINESS_ID,
                service_name,
                vehicle_type,
                Money::from_cents(*cents),
            )
            .await?;
    }
    info!(count = DEFAULT_PRICES.len(), "Price grid seeded");
    Ok(())
}

async fn seed_services(db: &Database, today: NaiveDate) -> DbResult<()> {
    let clients = [
        ("João", "(11) 98765-4321", "BRA2E19", "Fiat Uno", Some("Prata"), "Lavagem Completa", "SEDAN"),
        ("Maria", "(11) 91234-5678", "RIO4F56", "Jeep Renegade", Some("Preto"), "Lavagem Simples", "SUV"),
        ("Pedro", "(21) 99876-1234", "SPX7G89", "Honda Civic", None, "Enceramento", "SEDAN"),
    ];

    for (client, phone, plate, make_model, color, service_name, vehicle_type) in clients {
        let price = db
            .service_prices()
            .lookup(BUSINESS_ID, service_name, vehicle_type)
            .await?;

        let service = db
            .services()
            .add(
                BUSINESS_ID,
                &NewService {
                    client_name: client.to_string(),
                    client_phone: phone.to_string(),
                    car_plate: plate.to_string(),
                    car_make_model: make_model.to_string(),
                    car_color: color.map(str::to_string),
                    service_name: service_name.to_string(),
                    vehicle_type: vehicle_type.to_string(),
                    value: price,
                    date: today,
                    created_by_member_id: Some(OWNER_ID.to_string()),
                },
            )
            .await?;

        // Leave the last car in the queue
        if client != "Pedro" {
            db.services()
                .finish(&service.id, Some(PARTNER_ID))
                .await?;
        }
    }
    info!("Services seeded");
    Ok(())
}

async fn seed_expenses(db: &Database, today: NaiveDate) -> DbResult<()> {
    let month = MonthKey::from_date(today);
    let created = db
        .expenses()
        .ensure_recurring(BUSINESS_ID, &month, today)
        .await?;
    info!(created, "Recurring expenses materialized");

    let draft = AdHocExpenseDraft {
        value: "89.90".to_string(),
        category: ExpenseCategory::Produtos,
        description: Some("Detergente 20L, Cera Líquida".to_string()),
        status: ExpenseStatus::Pago,
        due_date: None,
    };
    db.expenses()
        .add_adhoc(BUSINESS_ID, &draft, today, Some(OWNER_ID))
        .await?;

    info!("Expenses seeded");
    Ok(())
}
