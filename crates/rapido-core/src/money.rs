//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In JavaScript/floating point:                                      │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Centavos                                     │
//! │    R$ 145,50 is stored as 14550                                     │
//! │    Sums over a month of expenses stay exact                         │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rapido_core::money::Money;
//!
//! // Parse from form input (the ONLY place decimals enter the system)
//! let paid = Money::parse("145.50").unwrap();
//! assert_eq!(paid.cents(), 14550);
//!
//! // Arithmetic operations
//! let total = paid + Money::from_cents(450); // R$ 150,00
//! assert_eq!(total.cents(), 15000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (centavos for BRL).
///
/// ## Design Decisions
/// - **i64 (signed)**: profit can be negative when expenses exceed revenue
/// - **Single-field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support for JSON serialization
///
/// Every stored amount (service value, amount paid, default expense
/// value, service price) flows through this type. Only reports convert
/// to `f64` reais, and only for derived display figures.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from centavos (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use rapido_core::money::Money;
    ///
    /// let price = Money::from_cents(8000); // R$ 80,00
    /// assert_eq!(price.cents(), 8000);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in centavos.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the value in reais as a float.
    ///
    /// For derived report figures and display only - never feed the
    /// result back into stored amounts.
    #[inline]
    pub fn reais(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Parses a user-entered decimal string into Money.
    ///
    /// ## Accepted Forms
    /// - `"150"`      → 15000 centavos
    /// - `"145.50"`   → 14550 centavos
    /// - `"0.5"`      →    50 centavos
    /// - `"145,50"`   → 14550 centavos (Brazilian decimal comma)
    ///
    /// At most two fractional digits are accepted; form inputs use
    /// `step="0.01"`, so anything finer is a malformed submission.
    ///
    /// ## Example
    /// ```rust
    /// use rapido_core::money::Money;
    ///
    /// assert_eq!(Money::parse("145.50").unwrap().cents(), 14550);
    /// assert_eq!(Money::parse("2000000").unwrap().cents(), 200_000_000);
    /// assert!(Money::parse("abc").is_none());
    /// assert!(Money::parse("1.005").is_none());
    /// ```
    pub fn parse(input: &str) -> Option<Money> {
        let input = input.trim().replace(',', ".");
        if input.is_empty() {
            return None;
        }

        let (sign, digits) = match input.strip_prefix('-') {
            Some(rest) => (-1i64, rest),
            None => (1i64, input.as_str()),
        };

        let (whole, frac) = match digits.split_once('.') {
            Some((w, f)) => (w, f),
            None => (digits, ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return None;
        }
        if frac.len() > 2 {
            return None;
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().ok()?
        };

        // "5" fractional means 50 centavos, "50" means 50
        let frac_cents: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().ok()? * 10,
            _ => frac.parse().ok()?,
        };

        let cents = whole.checked_mul(100)?.checked_add(frac_cents)?;
        Some(Money(sign * cents))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money in a human-readable format ("R$ 145.50").
///
/// For debugging and logs. Frontend formatting handles localization.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}R$ {}.{:02}", sign, (self.0 / 100).abs(), (self.0 % 100).abs())
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
