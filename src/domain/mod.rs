//! Domain module
//!
//! Core domain types and business rules.

pub mod error;
pub mod guest;
pub mod money;
pub mod pricing;
pub mod room;

pub use error::{DomainError, DomainResult, StateError, ValidationError};
pub use guest::{Guest, GuestCategory};
pub use money::{Money, MoneyError};
pub use pricing::{DiscountTier, PricingPolicy};
pub use room::Room;
