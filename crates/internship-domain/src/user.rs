//! User domain types.

use serde::Serialize;

/// Role tag carried by every user row.
///
/// Stored as `i16` (0 = Admin, 1 = Supervisor, 2 = Intern). Role-specific
/// data lives in extension tables keyed by user id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin = 0,
    Supervisor = 1,
    Intern = 2,
}

impl UserRole {
    /// Convert from the stored value. Returns `None` for unknown values.
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Admin),
            1 => Some(Self::Supervisor),
            2 => Some(Self::Intern),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Lifecycle state of a user account.
///
/// Stored as `i16` (0 = Pending, 1 = Active, 2 = Rejected). Accounts created
/// by an administrator start out `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    Pending = 0,
    Active = 1,
    Rejected = 2,
}

impl AccountStatus {
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Pending),
            1 => Some(Self::Active),
            2 => Some(Self::Rejected),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}
