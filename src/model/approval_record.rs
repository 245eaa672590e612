use serde::{Deserialize, Serialize};

/// Append-only audit row: one manager decision on one request.
/// Rows are never updated or deleted by the service.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct ApprovalRecord {
    pub id: u64,
    pub manager_id: u64,
    pub request_id: u64,
    pub decision: String,
}
