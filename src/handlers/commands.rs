//! Command definitions
//!
//! Commands represent intentions to change the system state.

use serde::{Deserialize, Serialize};

use crate::domain::{Guest, ValidationError};

/// Raw guest data as supplied by a caller, validated when the command runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestInput {
    pub name: String,
    pub age: i32,
}

impl GuestInput {
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    pub fn to_guest(&self) -> Result<Guest, ValidationError> {
        Guest::new(self.name.clone(), self.age)
    }
}

// =========================================================================
// BookStayCommand
// =========================================================================

/// Command to reserve a room for a group of guests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookStayCommand {
    /// Length of stay in days
    pub days: i32,
    pub guests: Vec<GuestInput>,
}

impl BookStayCommand {
    pub fn new(days: i32) -> Self {
        Self {
            days,
            guests: Vec::new(),
        }
    }

    pub fn with_guest(mut self, name: impl Into<String>, age: i32) -> Self {
        self.guests.push(GuestInput::new(name, age));
        self
    }
}
