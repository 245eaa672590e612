use serde::{Deserialize, Serialize};

/// One (user, leave type) row of the balance ledger. Unique per pair,
/// `balance` never goes negative.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct LeaveBalance {
    pub id: u64,
    pub user_id: u64,
    pub leave_type: String,
    pub balance: i32,
}
