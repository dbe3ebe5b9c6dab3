//! # Validation Module
//!
//! Business rule validation for Rápido POS.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Frontend (external)                                       │
//! │  ├── Basic format checks (empty, step="0.01")                       │
//! │  └── Immediate user feedback                                        │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE - business rule validation                    │
//! │  ├── Amount parse + (0, R$1.000.000] range                          │
//! │  ├── Description length                                             │
//! │  └── Due date required for pending entries                          │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Database (SQLite)                                         │
//! │  ├── CHECK constraints on status/day columns                        │
//! │  └── UNIQUE index guarding recurring generation                     │
//! │                                                                     │
//! │  The FIRST violated rule is reported; nothing is written.           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::types::{AdHocExpenseDraft, ExpensePayment, ExpenseStatus, NewService};
use crate::{MAX_DESCRIPTION_CHARS, MAX_EXPENSE_CENTS, MAX_SERVICE_VALUE_CENTS};

// =============================================================================
// Field Validators
// =============================================================================

/// Parses and range-checks a user-entered expense amount.
///
/// ## Rules
/// - Must parse as a decimal number (at most two fractional digits)
/// - Must be strictly positive
/// - Must not exceed R$ 1.000.000,00
///
/// ## Example
/// ```rust
/// use rapido_core::validation::parse_expense_amount;
///
/// assert_eq!(parse_expense_amount("50000").unwrap().cents(), 5_000_000);
/// assert!(parse_expense_amount("0").is_err());        // must be > 0
/// assert!(parse_expense_amount("2000000").is_err());  // over the cap
/// assert!(parse_expense_amount("abc").is_err());
/// ```
pub fn parse_expense_amount(value: &str) -> ValidationResult<Money> {
    if value.trim().is_empty() {
        return Err(ValidationError::required("value"));
    }

    let amount = Money::parse(value).ok_or_else(|| {
        ValidationError::invalid_format("value", "expected a decimal amount like 145.50")
    })?;

    if !amount.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "value".to_string(),
        });
    }

    if amount.cents() > MAX_EXPENSE_CENTS {
        return Err(ValidationError::OutOfRange {
            field: "value".to_string(),
            min: 1,
            max: MAX_EXPENSE_CENTS,
        });
    }

    Ok(amount)
}

/// Validates an optional free-text description (≤ 500 characters).
pub fn validate_description(description: Option<&str>) -> ValidationResult<()> {
    if let Some(text) = description {
        if text.chars().count() > MAX_DESCRIPTION_CHARS {
            return Err(ValidationError::TooLong {
                field: "description".to_string(),
                max: MAX_DESCRIPTION_CHARS,
            });
        }
    }
    Ok(())
}

/// Validates a day-of-month field (available_day / due_day).
///
/// ## Rules
/// - Must be within [1, 31]
/// - NO cross-field check between available_day and due_day: the pair
///   is stored as independent integers (a bill available on the 28th
///   and due on the 5th is not rejected here)
pub fn validate_day_of_month(field: &str, day: i64) -> ValidationResult<()> {
    if !(1..=31).contains(&day) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 1,
            max: 31,
        });
    }
    Ok(())
}

// =============================================================================
// Form Validators
// =============================================================================

/// A validated ad-hoc expense, ready to persist.
#[derive(Debug, Clone)]
pub struct ValidatedAdHocExpense {
    pub amount: Money,
    pub category: crate::types::ExpenseCategory,
    pub description: Option<String>,
    pub status: ExpenseStatus,
    /// Present exactly when `status` is Pendente.
    pub due_date: Option<NaiveDate>,
}

/// Validates an ad-hoc expense form submission.
///
/// ## Rule Order (first violation wins)
/// 1. value parses and is in (0, R$1.000.000]
/// 2. description is at most 500 characters
/// 3. a pending expense carries a due date
///
/// The category cannot be missing: it is a closed enum, so "no
/// selection" is unrepresentable past the form layer.
///
/// ## Behavior Note
/// For a `pendente` draft the entered amount is validated but NOT kept:
/// the real amount is captured at payment time. For `pago` it becomes
/// the `amount_paid`.
pub fn validate_adhoc_draft(draft: &AdHocExpenseDraft) -> ValidationResult<ValidatedAdHocExpense> {
    let amount = parse_expense_amount(&draft.value)?;
    validate_description(draft.description.as_deref())?;

    let due_date = match draft.status {
        ExpenseStatus::Pendente => Some(
            draft
                .due_date
                .ok_or_else(|| ValidationError::required("due_date"))?,
        ),
        ExpenseStatus::Pago => None,
    };

    Ok(ValidatedAdHocExpense {
        amount,
        category: draft.category,
        description: draft.description.clone().filter(|d| !d.trim().is_empty()),
        status: draft.status,
        due_date,
    })
}

/// Validates a new daily service before it enters the queue.
///
/// ## Rule Order (first violation wins, matching the service form)
/// 1. client_name present, ≤ 100 chars
/// 2. client_phone present, ≤ 20 chars (the pickup notification needs it)
/// 3. car_make_model present, ≤ 100 chars
/// 4. car_plate present, ≤ 10 chars
/// 5. car_color, when given, ≤ 50 chars
/// 6. vehicle_type and service_name selected
/// 7. value in (0, R$100.000,00]
pub fn validate_new_service(service: &NewService) -> ValidationResult<()> {
    required_text("client_name", &service.client_name, 100)?;
    required_text("client_phone", &service.client_phone, 20)?;
    required_text("car_make_model", &service.car_make_model, 100)?;
    required_text("car_plate", &service.car_plate, 10)?;

    if let Some(color) = &service.car_color {
        if color.chars().count() > 50 {
            return Err(ValidationError::TooLong {
                field: "car_color".to_string(),
                max: 50,
            });
        }
    }

    required_text("vehicle_type", &service.vehicle_type, 50)?;
    required_text("service_name", &service.service_name, 100)?;

    if !service.value.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "value".to_string(),
        });
    }
    if service.value.cents() > MAX_SERVICE_VALUE_CENTS {
        return Err(ValidationError::OutOfRange {
            field: "value".to_string(),
            min: 1,
            max: MAX_SERVICE_VALUE_CENTS,
        });
    }

    Ok(())
}

fn required_text(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::required(field));
    }
    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }
    Ok(())
}

/// Validates a payment before it is applied to a pending expense.
///
/// ## Rules
/// - amount must be strictly positive
/// - description is at most 500 characters
pub fn validate_payment(payment: &ExpensePayment) -> ValidationResult<()> {
    if !payment.amount_paid.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "amount_paid".to_string(),
        });
    }
    validate_description(payment.description.as_deref())?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ExpenseCategory;

    fn draft(value: &str, status: ExpenseStatus, due_date: Option<NaiveDate>) -> AdHocExpenseDraft {
        AdHocExpenseDraft {
            value: value.to_string(),
            category: ExpenseCategory::Produtos,
            description: None,
            status,
            due_date,
        }
    }

    #[test]
    fn test_amount_bounds() {
        // Scenario: 2 million rejected, zero rejected, 50k accepted
        assert!(matches!(
            parse_expense_amount("2000000"),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_expense_amount("0"),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert_eq!(parse_expense_amount("50000").unwrap().cents(), 5_000_000);

        // The cap itself is accepted (inclusive upper bound)
        assert!(parse_expense_amount("1000000").is_ok());
        assert!(parse_expense_amount("1000000.01").is_err());
    }

    #[test]
    fn test_amount_formats() {
        assert_eq!(parse_expense_amount("145.50").unwrap().cents(), 14550);
        assert!(matches!(
            parse_expense_amount(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            parse_expense_amount("dez reais"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_description_length() {
        assert!(validate_description(None).is_ok());
        assert!(validate_description(Some("Detergente 20L, Cera Líquida")).is_ok());

        let long = "x".repeat(501);
        let err = validate_description(Some(&long)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooLong {
                field: "description".to_string(),
                max: 500
            }
        );

        // Multibyte characters count as characters, not bytes
        let accented = "ç".repeat(500);
        assert!(validate_description(Some(&accented)).is_ok());
    }

    #[test]
    fn test_day_of_month_bounds() {
        assert!(validate_day_of_month("available_day", 1).is_ok());
        assert!(validate_day_of_month("available_day", 31).is_ok());
        assert!(validate_day_of_month("available_day", 0).is_err());
        assert!(validate_day_of_month("due_day", 32).is_err());
        assert!(validate_day_of_month("due_day", -3).is_err());
    }

    #[test]
    fn test_pending_draft_requires_due_date() {
        // Scenario: pendente without due date → rejected mentioning it
        let err = validate_adhoc_draft(&draft("100", ExpenseStatus::Pendente, None)).unwrap_err();
        assert_eq!(err.to_string(), "due_date is required");

        // Same draft with a due date → accepted
        let due = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        let ok = validate_adhoc_draft(&draft("100", ExpenseStatus::Pendente, Some(due))).unwrap();
        assert_eq!(ok.due_date, Some(due));
        assert_eq!(ok.status, ExpenseStatus::Pendente);
    }

    #[test]
    fn test_paid_draft_ignores_due_date() {
        let due = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        let ok = validate_adhoc_draft(&draft("100", ExpenseStatus::Pago, Some(due))).unwrap();
        assert_eq!(ok.due_date, None);
    }

    #[test]
    fn test_first_violation_wins() {
        // Bad amount AND missing due date: the amount error is reported
        let err = validate_adhoc_draft(&draft("0", ExpenseStatus::Pendente, None)).unwrap_err();
        assert!(matches!(err, ValidationError::MustBePositive { .. }));
    }

    fn new_service() -> NewService {
        NewService {
            client_name: "João".to_string(),
            client_phone: "(11) 98765-4321".to_string(),
            car_plate: "ABC1D23".to_string(),
            car_make_model: "Fiat Uno".to_string(),
            car_color: Some("Prata".to_string()),
            service_name: "Lavagem Completa".to_string(),
            vehicle_type: "SEDAN".to_string(),
            value: Money::from_cents(5000),
            date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            created_by_member_id: None,
        }
    }

    #[test]
    fn test_new_service_accepts_complete_form() {
        assert!(validate_new_service(&new_service()).is_ok());

        // Color is the one optional field
        let mut no_color = new_service();
        no_color.car_color = None;
        assert!(validate_new_service(&no_color).is_ok());
    }

    #[test]
    fn test_new_service_requires_phone() {
        let mut service = new_service();
        service.client_phone = "  ".to_string();
        let err = validate_new_service(&service).unwrap_err();
        assert_eq!(err, ValidationError::required("client_phone"));

        service.client_phone = "9".repeat(21);
        assert!(matches!(
            validate_new_service(&service).unwrap_err(),
            ValidationError::TooLong { max: 20, .. }
        ));
    }

    #[test]
    fn test_new_service_requires_make_model() {
        let mut service = new_service();
        service.car_make_model = String::new();
        let err = validate_new_service(&service).unwrap_err();
        assert_eq!(err, ValidationError::required("car_make_model"));
    }

    #[test]
    fn test_new_service_field_lengths() {
        let mut service = new_service();
        service.car_color = Some("x".repeat(51));
        assert!(matches!(
            validate_new_service(&service).unwrap_err(),
            ValidationError::TooLong { max: 50, .. }
        ));

        let mut service = new_service();
        service.car_plate = "x".repeat(11);
        assert!(matches!(
            validate_new_service(&service).unwrap_err(),
            ValidationError::TooLong { max: 10, .. }
        ));
    }

    #[test]
    fn test_new_service_value_bounds() {
        let mut service = new_service();
        service.value = Money::zero();
        assert!(matches!(
            validate_new_service(&service).unwrap_err(),
            ValidationError::MustBePositive { .. }
        ));

        // The R$ 100.000,00 cap is inclusive
        service.value = Money::from_cents(MAX_SERVICE_VALUE_CENTS);
        assert!(validate_new_service(&service).is_ok());
        service.value = Money::from_cents(MAX_SERVICE_VALUE_CENTS + 1);
        assert!(matches!(
            validate_new_service(&service).unwrap_err(),
            ValidationError::OutOfRange { .. }
        ));
    }

    #[test]
    fn test_payment_validation() {
        let mut payment = ExpensePayment {
            amount_paid: Money::from_cents(14550),
            paid_at: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            description: None,
            paid_by_member_id: None,
        };
        assert!(validate_payment(&payment).is_ok());

        payment.amount_paid = Money::zero();
        assert!(validate_payment(&payment).is_err());
    }
}
