//! Guest value type

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::ValidationError;

/// Guests younger than this are billed as children.
pub const CHILD_AGE_LIMIT: u32 = 12;

/// Age-derived billing category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GuestCategory {
    Adult,
    Child,
}

impl GuestCategory {
    pub fn from_age(age: u32) -> Self {
        if age < CHILD_AGE_LIMIT {
            Self::Child
        } else {
            Self::Adult
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Adult => "Adult",
            Self::Child => "Child",
        }
    }
}

impl fmt::Display for GuestCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One person staying in a room.
///
/// Immutable once built; the category is fixed from the age at construction.
/// Deserialization goes through `Guest::new`, so a stored category is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GuestRecord")]
pub struct Guest {
    name: String,
    age: u32,
    category: GuestCategory,
}

impl Guest {
    /// Create a new guest.
    ///
    /// # Errors
    /// - `ValidationError::EmptyName` if the name is empty or whitespace
    /// - `ValidationError::NegativeAge` if age < 0
    pub fn new(name: impl Into<String>, age: i32) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let age = u32::try_from(age).map_err(|_| ValidationError::NegativeAge(age))?;

        Ok(Self {
            name,
            age,
            category: GuestCategory::from_age(age),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn category(&self) -> GuestCategory {
        self.category
    }

    pub fn is_child(&self) -> bool {
        self.category == GuestCategory::Child
    }
}

#[derive(Deserialize)]
struct GuestRecord {
    name: String,
    age: i32,
}

impl TryFrom<GuestRecord> for Guest {
    type Error = ValidationError;

    fn try_from(record: GuestRecord) -> Result<Self, Self::Error> {
        Guest::new(record.name, record.age)
    }
}

impl fmt::Display for Guest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {} years)", self.name, self.category, self.age)
    }
}
