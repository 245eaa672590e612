use serde::{Deserialize, Serialize};

/// Claims of the access token issued by the external identity provider.
/// This service only verifies and consumes them.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: u64,
    pub sub: String,
    pub role: u8, // role id
    pub exp: usize,
}
