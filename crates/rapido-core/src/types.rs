//! # Domain Types
//!
//! Core domain types used throughout Rápido POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌────────────────┐   ┌────────────────┐   ┌────────────────┐      │
//! │  │  ExpenseType   │   │    Expense     │   │    Service     │      │
//! │  │  ────────────  │   │  ────────────  │   │  ────────────  │      │
//! │  │  id (UUID)     │──►│  id (UUID)     │   │  id (UUID)     │      │
//! │  │  available_day │   │  month_year    │   │  date          │      │
//! │  │  due_day       │   │  status        │   │  status        │      │
//! │  │  default_value │   │  amount_paid   │   │  value_cents   │      │
//! │  └────────────────┘   └────────────────┘   └────────────────┘      │
//! │                                                                     │
//! │  ┌────────────────┐   ┌────────────────┐   ┌────────────────┐      │
//! │  │ ExpenseStatus  │   │ ServiceStatus  │   │ExpenseCategory │      │
//! │  │  ────────────  │   │  ────────────  │   │  ────────────  │      │
//! │  │  Pendente      │   │  Pendente      │   │  Funcionário   │      │
//! │  │  Pago          │   │  Finalizado    │   │  Produtos, ... │      │
//! │  └────────────────┘   └────────────────┘   └────────────────┘      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Enum-as-String Discipline
//! Statuses and categories are stored as plain TEXT ("pendente",
//! "pago", "Funcionário", ...) for parity with the historical schema,
//! but modeled here as CLOSED enums so that adding a third status or
//! an eighth category is a compile-time-visible change everywhere.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Month Key
// =============================================================================

/// An accounting period key in "YYYY-MM" form.
///
/// ## Why a String Key?
/// Expenses belong to a billing month, not a timestamp. The fixed-width
/// zero-padded format makes lexicographic comparison equal to
/// chronological comparison, which the storage layer relies on.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(transparent))]
pub struct MonthKey(String);

impl MonthKey {
    /// The accounting period a given date falls in.
    ///
    /// ## Example
    /// ```rust
    /// use chrono::NaiveDate;
    /// use rapido_core::types::MonthKey;
    ///
    /// let day = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
    /// assert_eq!(MonthKey::from_date(day).to_string(), "2024-03");
    /// ```
    pub fn from_date(date: NaiveDate) -> Self {
        MonthKey(format!("{:04}-{:02}", date.year(), date.month()))
    }

    /// Returns the key as a string slice ("YYYY-MM").
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for MonthKey {
    type Err = ValidationError;

    /// Parses and validates a "YYYY-MM" key (month must be 01-12).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed =
            || ValidationError::invalid_format("month_year", "expected \"YYYY-MM\"");

        let (year, month) = s.split_once('-').ok_or_else(malformed)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(malformed());
        }
        year.parse::<u16>().map_err(|_| malformed())?;
        let month: u8 = month.parse().map_err(|_| malformed())?;
        if !(1..=12).contains(&month) {
            return Err(malformed());
        }

        Ok(MonthKey(s.to_string()))
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Expense Status
// =============================================================================

/// The payment status of an expense.
///
/// ## State Machine
/// ```text
/// pendente ──pay──► pago (terminal, no un-pay)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum ExpenseStatus {
    /// Recorded but not yet paid.
    Pendente,
    /// Paid. Terminal: no operation returns an expense to Pendente.
    Pago,
}

impl ExpenseStatus {
    /// Wire string stored in the database ("pendente" / "pago").
    pub const fn as_str(&self) -> &'static str {
        match self {
            ExpenseStatus::Pendente => "pendente",
            ExpenseStatus::Pago => "pago",
        }
    }
}

impl Default for ExpenseStatus {
    fn default() -> Self {
        ExpenseStatus::Pendente
    }
}

// =============================================================================
// Service Status
// =============================================================================

/// The status of a daily car-wash service.
///
/// Same one-way discipline as [`ExpenseStatus`]:
/// `pendente` (in the wash queue) → `finalizado` (ready for pickup).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    /// Car is in the wash queue.
    Pendente,
    /// Wash finished, car ready for pickup.
    Finalizado,
}

impl ServiceStatus {
    /// Wire string stored in the database ("pendente" / "finalizado").
    pub const fn as_str(&self) -> &'static str {
        match self {
            ServiceStatus::Pendente => "pendente",
            ServiceStatus::Finalizado => "finalizado",
        }
    }
}

impl Default for ServiceStatus {
    fn default() -> Self {
        ServiceStatus::Pendente
    }
}

// =============================================================================
// Expense Category
// =============================================================================

/// Fixed classification for ad-hoc expenses.
///
/// The seven names below are a wire vocabulary: they are stored as-is
/// (accents included) and drive icon lookup in the frontend. Keep the
/// spellings bit-exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
pub enum ExpenseCategory {
    #[serde(rename = "Funcionário")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "Funcionário"))]
    Funcionario,
    #[serde(rename = "Alimentação")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "Alimentação"))]
    Alimentacao,
    #[serde(rename = "Produtos")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "Produtos"))]
    Produtos,
    #[serde(rename = "Manutenção")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "Manutenção"))]
    Manutencao,
    #[serde(rename = "Estrutura")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "Estrutura"))]
    Estrutura,
    #[serde(rename = "Investimento")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "Investimento"))]
    Investimento,
    #[serde(rename = "Outros")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "Outros"))]
    Outros,
}

impl ExpenseCategory {
    /// All categories, in the order the selection form offers them.
    pub const ALL: [ExpenseCategory; 7] = [
        ExpenseCategory::Funcionario,
        ExpenseCategory::Alimentacao,
        ExpenseCategory::Produtos,
        ExpenseCategory::Manutencao,
        ExpenseCategory::Estrutura,
        ExpenseCategory::Investimento,
        ExpenseCategory::Outros,
    ];

    /// Wire string stored in the database.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Funcionario => "Funcionário",
            ExpenseCategory::Alimentacao => "Alimentação",
            ExpenseCategory::Produtos => "Produtos",
            ExpenseCategory::Manutencao => "Manutenção",
            ExpenseCategory::Estrutura => "Estrutura",
            ExpenseCategory::Investimento => "Investimento",
            ExpenseCategory::Outros => "Outros",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Member Role
// =============================================================================

/// Role of a user within the business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    /// Full access, including the admin tab.
    Owner,
    /// Operates the queue and ledger; earns 25% of gross revenue.
    Partner,
}

// =============================================================================
// Expense Type
// =============================================================================

/// A template for a recurring monthly bill (rent, electricity, ...).
///
/// Created once during business provisioning (external collaborator);
/// only `default_value_cents`, `available_day`, and `due_day` are
/// mutated afterwards, by the admin screen. Never deleted in normal
/// flow.
///
/// `available_day <= due_day` is NOT cross-validated: a bill available
/// on the 28th and due on the 5th is left to the owner's judgement,
/// and no month-rollover semantics are inferred.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct ExpenseType {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Business this template belongs to.
    pub business_id: String,

    /// Display label ("Luz", "Água", ...); also the icon lookup key.
    pub name: String,

    /// Whether a canonical amount exists for this bill.
    pub is_fixed: bool,

    /// Canonical amount in centavos; meaningful only when `is_fixed`.
    pub default_value_cents: Option<i64>,

    /// Day of month (1-31) from which this bill may be recorded.
    pub available_day: i64,

    /// Day of month (1-31) by which this bill should be paid.
    pub due_day: i64,
}

impl ExpenseType {
    /// Returns the canonical amount as Money, when one exists.
    #[inline]
    pub fn default_value(&self) -> Option<Money> {
        self.default_value_cents.map(Money::from_cents)
    }
}

/// Partial update of an expense type, applied by the admin screen.
///
/// `None` fields are left untouched. Day fields are range-checked
/// into [1,31] before the update is issued.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpenseTypeUpdate {
    pub default_value_cents: Option<i64>,
    pub available_day: Option<i64>,
    pub due_day: Option<i64>,
}

// =============================================================================
// Expense
// =============================================================================

/// One billing-period instance of an expense, recurring or ad-hoc.
///
/// ## Lifecycle
/// ```text
/// recurring: materialized lazily the first time anyone views the
///            current month on/after the type's available_day
/// ad-hoc:    created directly from the expense form
///
/// both:      pendente ──pay()──► pago   (at most once, terminal)
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Expense {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Business this entry belongs to.
    pub business_id: String,

    /// Back-reference to the recurring template; None for ad-hoc.
    pub expense_type_id: Option<String>,

    /// Copied from the type for recurring entries; the category label
    /// for ad-hoc entries.
    pub name: String,

    /// Ad-hoc classification; None for recurring entries.
    pub category: Option<ExpenseCategory>,

    /// Accounting period this instance belongs to ("YYYY-MM").
    pub month_year: MonthKey,

    /// Set at creation, never changed.
    pub is_recurring: bool,

    /// pendente → pago, one-way.
    pub status: ExpenseStatus,

    /// Payment deadline; ad-hoc pending entries only.
    pub due_date: Option<NaiveDate>,

    /// Amount actually paid, in centavos; set only on payment.
    pub amount_paid_cents: Option<i64>,

    /// Date the payment was made; set only on payment.
    pub paid_at: Option<NaiveDate>,

    /// Free text; itemizes "Produtos" purchases in particular.
    pub description: Option<String>,

    /// Audit: member who created this entry (None when generated).
    pub created_by_member_id: Option<String>,

    /// Audit: member who registered the payment.
    pub paid_by_member_id: Option<String>,

    /// When the row was created.
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Returns the paid amount as Money (zero when unpaid).
    #[inline]
    pub fn amount_paid(&self) -> Money {
        Money::from_cents(self.amount_paid_cents.unwrap_or(0))
    }

    /// Whether the expense has reached its terminal state.
    #[inline]
    pub fn is_paid(&self) -> bool {
        self.status == ExpenseStatus::Pago
    }
}

/// Form input for an ad-hoc expense, prior to validation.
///
/// `value` is the raw form string; it is parsed and range-checked by
/// [`crate::validation::validate_adhoc_draft`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdHocExpenseDraft {
    /// Raw amount as typed ("145.50").
    pub value: String,
    /// Classification; the form requires a selection.
    pub category: ExpenseCategory,
    /// Optional free text (≤ 500 chars).
    pub description: Option<String>,
    /// "Já paguei" (Pago) or "Pendente".
    pub status: ExpenseStatus,
    /// Payment deadline; required when status is Pendente.
    pub due_date: Option<NaiveDate>,
}

/// Payment details applied to a pending expense.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpensePayment {
    /// Amount actually paid (may differ from the type's default).
    pub amount_paid: Money,
    /// Date of payment.
    pub paid_at: NaiveDate,
    /// Optional free text; replaces the entry's description when set.
    pub description: Option<String>,
    /// Audit: member registering the payment.
    pub paid_by_member_id: Option<String>,
}

// =============================================================================
// Service
// =============================================================================

/// A daily car-wash service (one car, one wash).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Service {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Business this service belongs to.
    pub business_id: String,

    /// Customer name as given at drop-off.
    pub client_name: String,

    /// Customer phone; the pickup notification is sent here.
    pub client_phone: String,

    /// License plate (free-form, uppercased by the form).
    pub car_plate: String,

    /// Make and model ("Fiat Uno").
    pub car_make_model: String,

    /// Color, when the attendant bothered to fill it in.
    pub car_color: Option<String>,

    /// Service performed ("Lavagem Completa", ...).
    pub service_name: String,

    /// Vehicle size class ("SEDAN", "SUV", "MOTO", ...).
    pub vehicle_type: String,

    /// Price charged, in centavos.
    pub value_cents: i64,

    /// pendente → finalizado, one-way.
    pub status: ServiceStatus,

    /// Service date ("YYYY-MM-DD" in storage).
    pub date: NaiveDate,

    /// Audit: member who recorded the service.
    pub created_by_member_id: Option<String>,

    /// Audit: member who marked it finished.
    pub finished_by_member_id: Option<String>,

    /// When the row was created.
    pub created_at: DateTime<Utc>,
}

impl Service {
    /// Returns the charged price as Money.
    #[inline]
    pub fn value(&self) -> Money {
        Money::from_cents(self.value_cents)
    }
}

/// Input for recording a new daily service. Validated by
/// [`crate::validation::validate_new_service`] before persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewService {
    pub client_name: String,
    pub client_phone: String,
    pub car_plate: String,
    pub car_make_model: String,
    pub car_color: Option<String>,
    pub service_name: String,
    pub vehicle_type: String,
    pub value: Money,
    pub date: NaiveDate,
    pub created_by_member_id: Option<String>,
}

// =============================================================================
// Service Price
// =============================================================================

/// One cell of the admin price grid: a service/vehicle combination.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct ServicePrice {
    pub business_id: String,
    pub service_name: String,
    pub vehicle_type: String,
    pub price_cents: i64,
}

impl ServicePrice {
    /// Returns the configured price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Member
// =============================================================================

/// A user associated with a business. Provisioned externally;
/// consumed read-only here for audit-name lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Member {
    pub id: String,
    pub business_id: String,
    pub display_name: String,
    pub role: MemberRole,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_key_from_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(MonthKey::from_date(date).as_str(), "2024-03");

        let date = NaiveDate::from_ymd_opt(2024, 11, 30).unwrap();
        assert_eq!(MonthKey::from_date(date).as_str(), "2024-11");
    }

    #[test]
    fn test_month_key_parse() {
        assert!("2024-03".parse::<MonthKey>().is_ok());
        assert!("2024-12".parse::<MonthKey>().is_ok());

        assert!("2024-13".parse::<MonthKey>().is_err());
        assert!("2024-00".parse::<MonthKey>().is_err());
        assert!("2024-3".parse::<MonthKey>().is_err());
        assert!("24-03".parse::<MonthKey>().is_err());
        assert!("garbage".parse::<MonthKey>().is_err());
    }

    #[test]
    fn test_month_key_ordering_is_chronological() {
        let jan: MonthKey = "2024-01".parse().unwrap();
        let dec: MonthKey = "2023-12".parse().unwrap();
        assert!(dec < jan);
    }

    #[test]
    fn test_status_wire_strings() {
        assert_eq!(ExpenseStatus::Pendente.as_str(), "pendente");
        assert_eq!(ExpenseStatus::Pago.as_str(), "pago");
        assert_eq!(ServiceStatus::Finalizado.as_str(), "finalizado");
    }

    #[test]
    fn test_category_wire_strings_exact() {
        let expected = [
            "Funcionário",
            "Alimentação",
            "Produtos",
            "Manutenção",
            "Estrutura",
            "Investimento",
            "Outros",
        ];
        for (cat, want) in ExpenseCategory::ALL.iter().zip(expected) {
            assert_eq!(cat.as_str(), want);
        }
    }

    #[test]
    fn test_category_serde_uses_wire_strings() {
        let json = serde_json::to_string(&ExpenseCategory::Funcionario).unwrap();
        assert_eq!(json, "\"Funcionário\"");

        let back: ExpenseCategory = serde_json::from_str("\"Manutenção\"").unwrap();
        assert_eq!(back, ExpenseCategory::Manutencao);
    }

    #[test]
    fn test_expense_amount_paid_defaults_to_zero() {
        let expense = Expense {
            id: "e1".into(),
            business_id: "b1".into(),
            expense_type_id: None,
            name: "Produtos".into(),
            category: Some(ExpenseCategory::Produtos),
            month_year: "2024-03".parse().unwrap(),
            is_recurring: false,
            status: ExpenseStatus::Pendente,
            due_date: None,
            amount_paid_cents: None,
            paid_at: None,
            description: None,
            created_by_member_id: None,
            paid_by_member_id: None,
            created_at: Utc::now(),
        };
        assert_eq!(expense.amount_paid(), Money::zero());
        assert!(!expense.is_paid());
    }
}
