//! suite_booking Library
//!
//! Hotel suite reservations: guests, rooms, capacity checks, stay pricing
//! and cancellation.

pub mod aggregate;
pub mod config;
pub mod domain;
pub mod handlers;
mod error;

pub use aggregate::{Reservation, ReservationStatus, ReservationSummary};
pub use config::{Config, LogFormat};
pub use domain::{DomainError, DomainResult, Guest, GuestCategory, Money, PricingPolicy, Room};
pub use error::{AppError, AppResult};
