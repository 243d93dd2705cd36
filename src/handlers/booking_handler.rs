//! Booking Handler
//!
//! Validates guest input, opens a reservation against a room and assigns
//! the guests. Cancellation goes through here as well so both sides of the
//! workflow show up in the logs.

use crate::aggregate::Reservation;
use crate::domain::{DomainResult, Guest, Money, PricingPolicy, Room};

use super::BookStayCommand;

/// Handler for booking and cancelling stays
#[derive(Debug, Clone, Default)]
pub struct BookingHandler {
    pricing: PricingPolicy,
}

impl BookingHandler {
    pub fn new(pricing: PricingPolicy) -> Self {
        Self { pricing }
    }

    pub fn pricing(&self) -> &PricingPolicy {
        &self.pricing
    }

    /// Execute the book stay command.
    ///
    /// Guests are validated before the reservation is opened, so a rejected
    /// command never produces a half-filled reservation. A stay whose price
    /// cannot be represented is rejected as well.
    pub fn execute<'a>(
        &self,
        room: &'a Room,
        command: BookStayCommand,
    ) -> DomainResult<Reservation<'a>> {
        let result = self.book(room, &command);

        match &result {
            Ok((reservation, total)) => {
                tracing::info!(
                    reservation_id = %reservation.id(),
                    room = room.name(),
                    days = reservation.days(),
                    guests = reservation.guest_count(),
                    total = %total,
                    "Stay booked"
                );
            }
            Err(e) => {
                tracing::warn!(
                    room = room.name(),
                    days = command.days,
                    guests = command.guests.len(),
                    "Booking rejected: {}",
                    e
                );
            }
        }

        result.map(|(reservation, _)| reservation)
    }

    fn book<'a>(
        &self,
        room: &'a Room,
        command: &BookStayCommand,
    ) -> DomainResult<(Reservation<'a>, Money)> {
        let guests = command
            .guests
            .iter()
            .map(|input| input.to_guest())
            .collect::<Result<Vec<Guest>, _>>()?;

        let mut reservation = Reservation::with_policy(room, command.days, self.pricing.clone())?;
        reservation.assign_guests(&guests)?;

        let daily_rate = reservation.daily_rate()?;
        let total = reservation.total_price()?;

        tracing::debug!(
            reservation_id = %reservation.id(),
            daily_rate = %daily_rate,
            discount = %self.pricing.discount_for(reservation.days()),
            "Guests assigned"
        );

        Ok((reservation, total))
    }

    /// Cancel a reservation and release its room
    pub fn cancel(&self, reservation: &mut Reservation<'_>) {
        let already_cancelled = reservation.is_cancelled();
        reservation.cancel();

        if already_cancelled {
            tracing::debug!(
                reservation_id = %reservation.id(),
                "Reservation was already cancelled"
            );
        } else {
            tracing::info!(
                reservation_id = %reservation.id(),
                room = reservation.room().name(),
                "Reservation cancelled, room released"
            );
        }
    }
}
