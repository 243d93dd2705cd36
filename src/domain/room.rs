//! Room (suite) configuration
//!
//! Capacities and rates are fixed when the room is built. Only the
//! availability flag changes afterwards, and it can be flipped through a
//! shared reference so every reservation borrowing the room observes it.

use rust_decimal::Decimal;
use std::cell::Cell;

use super::error::ValidationError;
use super::guest::GuestCategory;
use super::money::Money;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    name: String,
    adult_capacity: u32,
    child_capacity: u32,
    adult_rate: Money,
    child_rate: Money,
    available: Cell<bool>,
}

impl Room {
    /// Create a new room, initially available.
    ///
    /// # Errors
    /// - `EmptyName` if the name is empty or whitespace
    /// - `InvalidAdultCapacity` if fewer than one adult fits
    /// - `InvalidChildCapacity` if the child capacity is negative
    /// - `InvalidAdultRate` if the adult rate is not positive or above `MAX_AMOUNT`
    /// - `InvalidChildRate` if the child rate is negative or above `MAX_AMOUNT`
    pub fn new(
        name: impl Into<String>,
        adult_capacity: i32,
        child_capacity: i32,
        adult_rate: Decimal,
        child_rate: Decimal,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let adult_capacity = u32::try_from(adult_capacity)
            .ok()
            .filter(|capacity| *capacity >= 1)
            .ok_or(ValidationError::InvalidAdultCapacity(adult_capacity))?;

        let child_capacity = u32::try_from(child_capacity)
            .map_err(|_| ValidationError::InvalidChildCapacity(child_capacity))?;

        if adult_rate <= Decimal::ZERO {
            return Err(ValidationError::InvalidAdultRate(adult_rate));
        }
        let adult_rate =
            Money::new(adult_rate).map_err(|_| ValidationError::InvalidAdultRate(adult_rate))?;

        let child_rate =
            Money::new(child_rate).map_err(|_| ValidationError::InvalidChildRate(child_rate))?;

        Ok(Self {
            name,
            adult_capacity,
            child_capacity,
            adult_rate,
            child_rate,
            available: Cell::new(true),
        })
    }

    /// Overwrite the availability flag. No validation is performed.
    pub fn set_availability(&self, available: bool) {
        self.available.set(available);
    }

    pub fn is_available(&self) -> bool {
        self.available.get()
    }

    /// Per-day rate charged for one guest of the given category
    pub fn rate_for(&self, category: GuestCategory) -> Money {
        match category {
            GuestCategory::Adult => self.adult_rate,
            GuestCategory::Child => self.child_rate,
        }
    }

    /// Maximum number of guests of the given category
    pub fn capacity_for(&self, category: GuestCategory) -> u32 {
        match category {
            GuestCategory::Adult => self.adult_capacity,
            GuestCategory::Child => self.child_capacity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn adult_capacity(&self) -> u32 {
        self.adult_capacity
    }

    pub fn child_capacity(&self) -> u32 {
        self.child_capacity
    }

    pub fn adult_rate(&self) -> Money {
        self.adult_rate
    }

    pub fn child_rate(&self) -> Money {
        self.child_rate
    }
}
