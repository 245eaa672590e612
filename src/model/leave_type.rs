use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

/// Fixed leave types. Stored in MySQL as the variant name ("Sick", ...).
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
pub enum LeaveType {
    Sick,
    Vacation,
    Casual,
}

impl LeaveType {
    pub const ALL: [LeaveType; 3] = [LeaveType::Sick, LeaveType::Vacation, LeaveType::Casual];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveType::Sick => "Sick",
            LeaveType::Vacation => "Vacation",
            LeaveType::Casual => "Casual",
        }
    }
}
