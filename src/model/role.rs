use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Closed role set. Role ids match the `roles` table seed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumString)]
pub enum Role {
    Admin = 1,
    Manager = 2,
    Employee = 3,
}

impl Role {
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Role::Admin),
            2 => Some(Role::Manager),
            3 => Some(Role::Employee),
            _ => None,
        }
    }

    pub fn id(self) -> u8 {
        self as u8
    }
}
