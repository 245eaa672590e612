use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

use crate::error::AppError;

/// Lifecycle status of a leave request. Stored as the variant name.
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Rejected => "Rejected",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct LeaveRequest {
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = 1000)]
    pub user_id: u64,
    #[schema(example = "Sick", value_type = String)]
    pub leave_type: String,
    #[schema(example = "2026-01-05", format = "date", value_type = String)]
    pub start_date: NaiveDate,
    #[schema(example = "2026-01-09", format = "date", value_type = String)]
    pub end_date: NaiveDate,
    #[schema(example = "Pending", value_type = String)]
    pub status: String,
    /// Approval level: 1..=3 awaiting that manager stage, 4 terminal.
    #[schema(example = 1)]
    pub level: u8,
    pub remarks: Option<String>,
}

impl LeaveRequest {
    pub fn parsed_status(&self) -> Result<LeaveStatus, AppError> {
        self.status
            .parse()
            .map_err(|_| AppError::Validation(format!("unrecognized leave status '{}'", self.status)))
    }
}
