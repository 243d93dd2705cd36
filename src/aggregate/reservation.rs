//! Reservation Aggregate
//!
//! Binds one room to a set of guests for a number of days. Enforces the
//! room capacity on assignment, prices the stay, and releases the room on
//! cancellation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    DomainResult, Guest, GuestCategory, Money, PricingPolicy, Room, StateError, ValidationError,
};

/// Reservation status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReservationStatus {
    Active,
    Cancelled,
}

impl Default for ReservationStatus {
    fn default() -> Self {
        Self::Active
    }
}

/// Reservation Aggregate
///
/// Borrows the room it books, so the room always outlives the reservation.
///
/// # Invariants
/// - Assigned guests never exceed the room's adult or child capacity
/// - Once cancelled, the guest list is empty and the total price is zero
#[derive(Debug, Clone)]
pub struct Reservation<'a> {
    /// Unique reservation ID
    id: Uuid,

    /// Booked room (shared, not owned)
    room: &'a Room,

    /// Assigned guests, in the order they were given
    guests: Vec<Guest>,

    /// Length of stay
    days: u32,

    status: ReservationStatus,

    pricing: PricingPolicy,

    created_at: DateTime<Utc>,

    cancelled_at: Option<DateTime<Utc>>,
}

impl<'a> Reservation<'a> {
    // =========================================================================
    // Reservation::new()
    // =========================================================================

    /// Create a reservation priced with the default policy.
    ///
    /// The room's availability flag is checked but not changed.
    ///
    /// # Errors
    /// - `StateError::RoomUnavailable` if the room is marked unavailable
    /// - `ValidationError::InvalidDays` if days <= 0
    ///
    /// Availability is checked first, so an unavailable room is reported
    /// even when `days` is also invalid.
    pub fn new(room: &'a Room, days: i32) -> DomainResult<Self> {
        Self::with_policy(room, days, PricingPolicy::default())
    }

    /// Create a reservation priced with a custom policy.
    pub fn with_policy(room: &'a Room, days: i32, pricing: PricingPolicy) -> DomainResult<Self> {
        if !room.is_available() {
            return Err(StateError::RoomUnavailable {
                room: room.name().to_string(),
            }
            .into());
        }

        let days = u32::try_from(days)
            .ok()
            .filter(|days| *days > 0)
            .ok_or(ValidationError::InvalidDays(days))?;

        Ok(Self {
            id: Uuid::new_v4(),
            room,
            guests: Vec::new(),
            days,
            status: ReservationStatus::Active,
            pricing,
            created_at: Utc::now(),
            cancelled_at: None,
        })
    }

    // =========================================================================
    // Reservation::assign_guests()
    // =========================================================================

    /// Replace the guest list with a copy of `guests`.
    ///
    /// Nothing changes if any check fails.
    ///
    /// # Errors
    /// - `StateError::ReservationCancelled` after `cancel()`
    /// - `ValidationError::EmptyGuestList` if `guests` is empty
    /// - `StateError::AdultCapacityExceeded` / `ChildCapacityExceeded`
    pub fn assign_guests(&mut self, guests: &[Guest]) -> DomainResult<()> {
        if self.is_cancelled() {
            return Err(StateError::ReservationCancelled.into());
        }
        if guests.is_empty() {
            return Err(ValidationError::EmptyGuestList.into());
        }

        let children = count_category(guests, GuestCategory::Child);
        let adults = count_category(guests, GuestCategory::Adult);

        if adults > self.room.adult_capacity() {
            return Err(StateError::AdultCapacityExceeded {
                requested: adults,
                capacity: self.room.adult_capacity(),
            }
            .into());
        }
        if children > self.room.child_capacity() {
            return Err(StateError::ChildCapacityExceeded {
                requested: children,
                capacity: self.room.child_capacity(),
            }
            .into());
        }

        self.guests = guests.to_vec();
        Ok(())
    }

    // =========================================================================
    // Pricing
    // =========================================================================

    /// Sum of the per-day rate of every assigned guest
    ///
    /// # Errors
    /// - `ValidationError::InvalidAmount` if the sum exceeds the maximum amount
    pub fn daily_rate(&self) -> DomainResult<Money> {
        let rates = self
            .guests
            .iter()
            .map(|guest| self.room.rate_for(guest.category()));
        Ok(Money::try_sum(rates)?)
    }

    /// Price of the whole stay, cleaning fee and discount included.
    ///
    /// Always zero once cancelled.
    ///
    /// # Errors
    /// - `ValidationError::InvalidAmount` if the stay exceeds the maximum amount
    pub fn total_price(&self) -> DomainResult<Money> {
        if self.is_cancelled() {
            return Ok(Money::ZERO);
        }
        Ok(self.pricing.total(self.daily_rate()?, self.days)?)
    }

    // =========================================================================
    // Reservation::cancel()
    // =========================================================================

    /// Cancel the reservation, clear its guests and release the room.
    ///
    /// Safe to call more than once; `cancelled_at` keeps the first cancellation time.
    pub fn cancel(&mut self) {
        self.status = ReservationStatus::Cancelled;
        self.guests.clear();
        self.room.set_availability(true);
        self.cancelled_at.get_or_insert_with(Utc::now);
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn room(&self) -> &'a Room {
        self.room
    }

    /// Currently assigned guests; an empty slice when there are none
    pub fn guests(&self) -> &[Guest] {
        &self.guests
    }

    pub fn guest_count(&self) -> usize {
        self.guests.len()
    }

    pub fn has_guests(&self) -> bool {
        !self.guests.is_empty()
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn status(&self) -> ReservationStatus {
        self.status
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == ReservationStatus::Cancelled
    }

    pub fn pricing(&self) -> &PricingPolicy {
        &self.pricing
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn cancelled_at(&self) -> Option<DateTime<Utc>> {
        self.cancelled_at
    }

    /// Owned, serializable snapshot of the current state
    pub fn summary(&self) -> DomainResult<ReservationSummary> {
        Ok(ReservationSummary {
            id: self.id,
            room: self.room.name().to_string(),
            days: self.days,
            status: self.status,
            guests: self.guests.clone(),
            daily_rate: self.daily_rate()?,
            total_price: self.total_price()?,
            created_at: self.created_at,
            cancelled_at: self.cancelled_at,
        })
    }
}

fn count_category(guests: &[Guest], category: GuestCategory) -> u32 {
    let count = guests.iter().filter(|g| g.category() == category).count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Point-in-time view of a reservation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationSummary {
    pub id: Uuid,
    pub room: String,
    pub days: u32,
    pub status: ReservationStatus,
    pub guests: Vec<Guest>,
    pub daily_rate: Money,
    pub total_price: Money,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancelled_at: Option<DateTime<Utc>>,
}

// =========================================================================
// Reservation unit tests
// =========================================================================
