//! Domain Error Types
//!
//! Pure domain errors that don't depend on infrastructure.

use rust_decimal::Decimal;
use thiserror::Error;

use super::money::MoneyError;

/// Result alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Malformed input to a constructor or operation.
///
/// Always raised before any state is touched.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid name: must not be empty")]
    EmptyName,

    #[error("Invalid age: {0}")]
    NegativeAge(i32),

    #[error("Invalid adult capacity: {0} (at least 1 required)")]
    InvalidAdultCapacity(i32),

    #[error("Invalid child capacity: {0}")]
    InvalidChildCapacity(i32),

    #[error("Invalid adult rate: {0} (must be positive)")]
    InvalidAdultRate(Decimal),

    #[error("Invalid child rate: {0}")]
    InvalidChildRate(Decimal),

    #[error("Invalid number of days: {0}")]
    InvalidDays(i32),

    #[error("Guest list is empty")]
    EmptyGuestList,

    #[error("Invalid discount rate: {0} (expected 0 <= rate < 1)")]
    InvalidDiscount(Decimal),

    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] MoneyError),
}

/// Operation not allowed in the current state of the object.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StateError {
    #[error("Room unavailable: {room}")]
    RoomUnavailable { room: String },

    #[error("Reservation is cancelled")]
    ReservationCancelled,

    #[error("Capacity exceeded: adults ({requested} > {capacity})")]
    AdultCapacityExceeded { requested: u32, capacity: u32 },

    #[error("Capacity exceeded: children ({requested} > {capacity})")]
    ChildCapacityExceeded { requested: u32, capacity: u32 },
}

/// Any failure raised by the booking domain.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    State(#[from] StateError),
}

impl DomainError {
    /// Check if the caller supplied malformed input
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if the operation conflicted with the current state
    pub fn is_state_error(&self) -> bool {
        matches!(self, Self::State(_))
    }
}

impl From<MoneyError> for DomainError {
    fn from(err: MoneyError) -> Self {
        Self::Validation(ValidationError::InvalidAmount(err))
    }
}
