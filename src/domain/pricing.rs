//! Stay pricing
//!
//! A stay costs `(daily_rate * days + cleaning_fee)`, reduced by the
//! length-of-stay discount. Tiers are mutually exclusive and the highest
//! matching threshold wins.

use rust_decimal::Decimal;
use super::error::ValidationError;
use super::money::{Money, MoneyError};

/// Flat fee added once per stay, in currency units
pub const CLEANING_FEE: u32 = 50;

/// Stays longer than this many days get `EXTENDED_STAY_DISCOUNT_PERCENT` off
pub const EXTENDED_STAY_DAYS: u32 = 15;
pub const EXTENDED_STAY_DISCOUNT_PERCENT: i64 = 20;

/// Stays longer than this many days get `LONG_STAY_DISCOUNT_PERCENT` off
pub const LONG_STAY_DAYS: u32 = 10;
pub const LONG_STAY_DISCOUNT_PERCENT: i64 = 10;

fn percent(value: i64) -> Decimal {
    Decimal::new(value, 2)
}

/// Discount applied to stays strictly longer than `min_days`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscountTier {
    min_days: u32,
    rate: Decimal,
}

impl DiscountTier {
    /// # Errors
    /// - `ValidationError::InvalidDiscount` unless `0 <= rate < 1`
    pub fn new(min_days: u32, rate: Decimal) -> Result<Self, ValidationError> {
        check_rate(rate)?;
        Ok(Self { min_days, rate })
    }

    pub fn min_days(&self) -> u32 {
        self.min_days
    }

    pub fn rate(&self) -> Decimal {
        self.rate
    }

    fn applies_to(&self, days: u32) -> bool {
        days > self.min_days
    }
}

fn check_rate(rate: Decimal) -> Result<(), ValidationError> {
    if rate < Decimal::ZERO || rate >= Decimal::ONE {
        return Err(ValidationError::InvalidDiscount(rate));
    }
    Ok(())
}

/// Cleaning fee plus length-of-stay discount tiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingPolicy {
    cleaning_fee: Money,
    /// Sorted by `min_days`, highest first
    tiers: Vec<DiscountTier>,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            cleaning_fee: Money::from_units(CLEANING_FEE),
            tiers: vec![
                DiscountTier {
                    min_days: EXTENDED_STAY_DAYS,
                    rate: percent(EXTENDED_STAY_DISCOUNT_PERCENT),
                },
                DiscountTier {
                    min_days: LONG_STAY_DAYS,
                    rate: percent(LONG_STAY_DISCOUNT_PERCENT),
                },
            ],
        }
    }
}

impl PricingPolicy {
    /// # Errors
    /// - `ValidationError::InvalidDiscount` if a tier rate is outside `[0, 1)`
    pub fn new(cleaning_fee: Money, mut tiers: Vec<DiscountTier>) -> Result<Self, ValidationError> {
        for tier in &tiers {
            check_rate(tier.rate)?;
        }
        tiers.sort_by(|a, b| b.min_days.cmp(&a.min_days));
        Ok(Self { cleaning_fee, tiers })
    }

    pub fn cleaning_fee(&self) -> Money {
        self.cleaning_fee
    }

    pub fn tiers(&self) -> &[DiscountTier] {
        &self.tiers
    }

    /// Discount rate for a stay of `days`, zero when no tier applies
    pub fn discount_for(&self, days: u32) -> Decimal {
        self.tiers
            .iter()
            .find(|tier| tier.applies_to(days))
            .map(|tier| tier.rate)
            .unwrap_or(Decimal::ZERO)
    }

    /// Total price of a stay given the summed per-day rate of its guests
    ///
    /// # Errors
    /// - `MoneyError::Overflow` if the stay exceeds the maximum amount
    pub fn total(&self, daily_rate: Money, days: u32) -> Result<Money, MoneyError> {
        let base = daily_rate.try_mul(days)?.try_add(&self.cleaning_fee)?;
        base.try_discount(self.discount_for(days))
    }
}
