use crate::UserId;

use serde::{Deserialize, Serialize};

/// One accepted connection as projected into the friends list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendEntry {
    pub id: UserId,
    pub name: String,
    pub friend_code: String,
    pub avatar_url: Option<String>,
}

impl FriendEntry {
    /// Case-insensitive match against name or friend code
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&needle)
            || self.friend_code.to_lowercase().contains(&needle)
    }
}
