//! Intern domain types.

use serde::Serialize;

/// Progress of an internship.
///
/// Stored as `i16` (0 = Pending, 1 = Active, 2 = Completed, 3 = Cancelled).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InternStatus {
    Pending = 0,
    Active = 1,
    Completed = 2,
    Cancelled = 3,
}

impl InternStatus {
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Pending),
            1 => Some(Self::Active),
            2 => Some(Self::Completed),
            3 => Some(Self::Cancelled),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}
