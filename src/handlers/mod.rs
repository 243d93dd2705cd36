//! Command Handlers module
//!
//! Handlers that run the booking workflow on top of the domain and
//! aggregate layers and log each step.

mod booking_handler;
mod commands;

#[cfg(test)]
mod tests;

pub use booking_handler::BookingHandler;
pub use commands::*;
