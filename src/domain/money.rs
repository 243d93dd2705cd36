//! Money type
//!
//! Domain primitive for prices and rates. Values are validated at
//! construction time, so a negative or out-of-range amount cannot exist in
//! the system. Arithmetic is checked and reports overflow instead of panicking.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul};
use std::str::FromStr;

/// Maximum representable amount (1 trillion currency units)
pub const MAX_AMOUNT: i64 = 1_000_000_000_000;

/// Money represents a non-negative monetary value.
///
/// # Invariants
/// - Value is always >= 0
/// - Value never exceeds `MAX_AMOUNT`
///
/// # Example
/// ```
/// use rust_decimal::Decimal;
/// use suite_booking::domain::Money;
///
/// let rate = Money::new(Decimal::new(400, 0)).unwrap();
/// assert_eq!(rate.to_string(), "400.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

/// Errors that can occur when creating or combining Money
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoneyError {
    #[error("Amount must not be negative (got {0})")]
    Negative(Decimal),

    #[error("Amount exceeds maximum allowed value ({MAX_AMOUNT})")]
    Overflow,

    #[error("Invalid amount format: {0}")]
    ParseError(String),
}

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Create a new Money value.
    ///
    /// # Errors
    /// - `MoneyError::Negative` if value < 0
    /// - `MoneyError::Overflow` if value > `MAX_AMOUNT`
    pub fn new(value: Decimal) -> Result<Self, MoneyError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(MoneyError::Negative(value));
        }
        if value > Decimal::from(MAX_AMOUNT) {
            return Err(MoneyError::Overflow);
        }
        Ok(Self(value))
    }

    /// Create Money from a whole number of currency units.
    pub fn from_units(value: u32) -> Self {
        Self(Decimal::from(value))
    }

    /// Get the underlying Decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn try_add(&self, other: &Money) -> Result<Money, MoneyError> {
        let sum = self.0.checked_add(other.0).ok_or(MoneyError::Overflow)?;
        Money::new(sum)
    }

    /// Multiply by a count (days, guests)
    pub fn try_mul(&self, count: u32) -> Result<Money, MoneyError> {
        let product = self
            .0
            .checked_mul(Decimal::from(count))
            .ok_or(MoneyError::Overflow)?;
        Money::new(product)
    }

    /// Apply a fractional reduction, e.g. `0.10` for ten percent off.
    ///
    /// A rate above 1 would make the result negative and is rejected.
    pub fn try_discount(&self, rate: Decimal) -> Result<Money, MoneyError> {
        let factor = Decimal::ONE.checked_sub(rate).ok_or(MoneyError::Overflow)?;
        let reduced = self.0.checked_mul(factor).ok_or(MoneyError::Overflow)?;
        Money::new(reduced)
    }

    /// Sum an iterator of amounts, failing on overflow
    pub fn try_sum<I>(amounts: I) -> Result<Money, MoneyError>
    where
        I: IntoIterator<Item = Money>,
    {
        amounts
            .into_iter()
            .try_fold(Money::ZERO, |total, amount| total.try_add(&amount))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decimal = Decimal::from_str(s.trim())
            .map_err(|e| MoneyError::ParseError(e.to_string()))?;
        Money::new(decimal)
    }
}

impl TryFrom<Decimal> for Money {
    type Error = MoneyError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Money::new(value)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl Add for Money {
    type Output = Result<Money, MoneyError>;

    fn add(self, rhs: Self) -> Self::Output {
        self.try_add(&rhs)
    }
}

impl Mul<u32> for Money {
    type Output = Result<Money, MoneyError>;

    fn mul(self, rhs: u32) -> Self::Output {
        self.try_mul(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_zero_allowed() {
        let money = Money::new(Decimal::ZERO).unwrap();
        assert!(money.is_zero());
    }

    #[test]
    fn test_money_negative_rejected() {
        let money = Money::new(dec!(-0.01));
        assert!(matches!(money, Err(MoneyError::Negative(_))));
    }

    #[test]
    fn test_money_max_value() {
        assert!(Money::new(Decimal::from(MAX_AMOUNT)).is_ok());
        assert_eq!(
            Money::new(Decimal::from(MAX_AMOUNT) + dec!(0.01)),
            Err(MoneyError::Overflow)
        );
        assert_eq!(
            Money::new(dec!(10000000000000000000000000000)),
            Err(MoneyError::Overflow)
        );
    }

    #[test]
    fn test_money_display_two_places() {
        assert_eq!(Money::from_units(10845).to_string(), "10845.00");
        assert_eq!(Money::new(dec!(12.5)).unwrap().to_string(), "12.50");
    }

    #[test]
    fn test_money_from_str() {
        let money: Money = "123.45".parse().unwrap();
        assert_eq!(money.value(), dec!(123.45));

        let bad: Result<Money, _> = "abc".parse();
        assert!(matches!(bad, Err(MoneyError::ParseError(_))));
    }

    #[test]
    fn test_money_arithmetic() {
        let rates = [Money::from_units(400), Money::from_units(400), Money::from_units(200)];
        let daily = Money::try_sum(rates).unwrap();
        assert_eq!(daily, Money::from_units(1000));

        let stay = (daily * 12).and_then(|base| base + Money::from_units(50)).unwrap();
        assert_eq!(stay.value(), dec!(12050));
        assert_eq!(stay.try_discount(dec!(0.10)).unwrap().value(), dec!(10845));
    }

    #[test]
    fn test_money_overflow_is_reported() {
        let max = Money::new(Decimal::from(MAX_AMOUNT)).unwrap();

        assert_eq!(max.try_add(&Money::from_units(1)), Err(MoneyError::Overflow));
        assert_eq!(max.try_mul(u32::MAX), Err(MoneyError::Overflow));
        assert_eq!(Money::try_sum([max, max]), Err(MoneyError::Overflow));
        assert_eq!(max.try_mul(1), Ok(max));
    }

    #[test]
    fn test_money_discount_cannot_go_negative() {
        let price = Money::from_units(100);

        assert!(matches!(price.try_discount(dec!(2)), Err(MoneyError::Negative(_))));
        assert_eq!(price.try_discount(Decimal::ONE), Ok(Money::ZERO));
        assert_eq!(price.try_discount(Decimal::ZERO), Ok(price));
    }

    #[test]
    fn test_money_deserialize_rejects_negative() {
        let ok: Money = serde_json::from_str("\"400\"").unwrap();
        assert_eq!(ok, Money::from_units(400));

        let bad: Result<Money, _> = serde_json::from_str("\"-5\"");
        assert!(bad.is_err());
    }
}
