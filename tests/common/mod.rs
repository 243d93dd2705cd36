//! Common test utilities

#![allow(dead_code)]

use rust_decimal_macros::dec;
use suite_booking::{Guest, Room};

/// The "Executiva" suite: 2 adults, 1 child, 400 / 200 per day
pub fn executive_suite() -> Room {
    Room::new("Executiva", 2, 1, dec!(400), dec!(200)).expect("valid room")
}

/// Two adults and one child
pub fn family() -> Vec<Guest> {
    vec![
        Guest::new("Lucas", 32).expect("valid guest"),
        Guest::new("Ana", 29).expect("valid guest"),
        Guest::new("Pedro", 8).expect("valid guest"),
    ]
}

pub fn adults(count: usize) -> Vec<Guest> {
    (0..count)
        .map(|i| Guest::new(format!("Adult {}", i + 1), 30).expect("valid guest"))
        .collect()
}
