//! Aggregate module
//!
//! Stateful aggregates built on top of the domain value types.

pub mod reservation;

pub use reservation::{Reservation, ReservationStatus, ReservationSummary};
