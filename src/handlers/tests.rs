//! Handler tests
//!
//! Exercise the full book / cancel workflow through the handler.

#[cfg(test)]
mod tests {
    use crate::aggregate::ReservationStatus;
    use crate::domain::{
        DiscountTier, DomainError, Money, MoneyError, PricingPolicy, Room, StateError,
        ValidationError,
    };
    use crate::handlers::{BookStayCommand, BookingHandler, GuestInput};
    use rust_decimal_macros::dec;

    fn executive() -> Room {
        Room::new("Executiva", 2, 1, dec!(400), dec!(200)).unwrap()
    }

    fn family_stay(days: i32) -> BookStayCommand {
        BookStayCommand::new(days)
            .with_guest("Lucas", 32)
            .with_guest("Ana", 29)
            .with_guest("Pedro", 8)
    }

    // =========================================================================
    // Command construction
    // =========================================================================

    #[test]
    fn test_book_stay_command_builder() {
        let cmd = family_stay(12);

        assert_eq!(cmd.days, 12);
        assert_eq!(cmd.guests.len(), 3);
        assert_eq!(cmd.guests[2], GuestInput::new("Pedro", 8));
    }

    #[test]
    fn test_guest_input_validation() {
        assert!(GuestInput::new("Ana", 29).to_guest().is_ok());
        assert_eq!(
            GuestInput::new("", 29).to_guest(),
            Err(ValidationError::EmptyName)
        );
    }

    // =========================================================================
    // Booking
    // =========================================================================

    #[test]
    fn test_execute_books_stay() {
        let room = executive();
        let handler = BookingHandler::default();

        let reservation = handler.execute(&room, family_stay(12)).unwrap();

        assert_eq!(reservation.guest_count(), 3);
        assert_eq!(reservation.daily_rate().unwrap(), Money::from_units(1000));
        assert_eq!(reservation.total_price().unwrap().value(), dec!(10845));
    }

    #[test]
    fn test_execute_rejects_invalid_guest() {
        let room = executive();
        let handler = BookingHandler::default();
        let cmd = BookStayCommand::new(3).with_guest("Lucas", 32).with_guest("Ghost", -2);

        let err = handler.execute(&room, cmd).unwrap_err();
        assert_eq!(err, DomainError::Validation(ValidationError::NegativeAge(-2)));
    }

    #[test]
    fn test_execute_rejects_empty_guest_list() {
        let room = executive();
        let handler = BookingHandler::default();

        let err = handler.execute(&room, BookStayCommand::new(3)).unwrap_err();
        assert_eq!(err, DomainError::Validation(ValidationError::EmptyGuestList));
    }

    #[test]
    fn test_execute_rejects_over_capacity() {
        let room = executive();
        let handler = BookingHandler::default();
        let cmd = BookStayCommand::new(3)
            .with_guest("A", 30)
            .with_guest("B", 30)
            .with_guest("C", 30);

        let err = handler.execute(&room, cmd).unwrap_err();
        assert!(matches!(
            err,
            DomainError::State(StateError::AdultCapacityExceeded { .. })
        ));
    }

    #[test]
    fn test_execute_rejects_unavailable_room() {
        let room = executive();
        room.set_availability(false);
        let handler = BookingHandler::default();

        let err = handler.execute(&room, family_stay(2)).unwrap_err();
        assert!(err.is_state_error());
    }

    #[test]
    fn test_execute_rejects_unpriceable_stay() {
        let room = Room::new("Penthouse", 2, 0, dec!(900000000000), dec!(0)).unwrap();
        let handler = BookingHandler::default();
        let cmd = BookStayCommand::new(12).with_guest("A", 30).with_guest("B", 40);

        let err = handler.execute(&room, cmd).unwrap_err();
        assert_eq!(
            err,
            DomainError::Validation(ValidationError::InvalidAmount(MoneyError::Overflow))
        );
    }

    #[test]
    fn test_execute_uses_handler_policy() {
        let room = executive();
        let policy = PricingPolicy::new(
            Money::from_units(100),
            vec![DiscountTier::new(5, dec!(0.25)).unwrap()],
        )
        .unwrap();
        let handler = BookingHandler::new(policy);

        let reservation = handler.execute(&room, family_stay(6)).unwrap();

        // (1000 * 6 + 100) * 0.75
        assert_eq!(reservation.total_price().unwrap().value(), dec!(4575));
        assert_eq!(handler.pricing().cleaning_fee(), Money::from_units(100));
    }

    // =========================================================================
    // Cancellation
    // =========================================================================

    #[test]
    fn test_cancel_releases_room() {
        let room = executive();
        let handler = BookingHandler::default();
        let mut reservation = handler.execute(&room, family_stay(12)).unwrap();
        room.set_availability(false);

        handler.cancel(&mut reservation);

        assert_eq!(reservation.status(), ReservationStatus::Cancelled);
        assert!(reservation.guests().is_empty());
        assert_eq!(reservation.total_price().unwrap(), Money::ZERO);
        assert!(room.is_available());
    }

    #[test]
    fn test_cancel_twice() {
        let room = executive();
        let handler = BookingHandler::default();
        let mut reservation = handler.execute(&room, family_stay(12)).unwrap();

        handler.cancel(&mut reservation);
        handler.cancel(&mut reservation);

        assert!(reservation.is_cancelled());
        assert!(!reservation.has_guests());
        assert!(room.is_available());
    }
}
