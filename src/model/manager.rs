use serde::{Deserialize, Serialize};

/// Manager profile. Exists iff the linked user has the Manager role;
/// `level` is the approval stage (1..=3) this manager acts at.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Manager {
    pub id: u64,
    pub user_id: u64,
    pub name: Option<String>,
    pub level: u8,
}
