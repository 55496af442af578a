use crate::UserId;

use serde::{Deserialize, Serialize};

/// An incoming friend request awaiting accept or decline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingRequest {
    pub id: UserId,
    pub name: String,
    pub friend_code: String,
}
