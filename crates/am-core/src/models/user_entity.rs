//! Current-user entity - the canonical account record cached client-side.

use crate::Theme;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account identifier assigned by the remote authority.
/// Always positive; zero and negative values are treated as corruption.
pub type UserId = i64;

/// The one account record the client caches. Replaced or patched as a
/// whole unit; never partially aliased.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserEntity {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub avatar_url: Option<String>,
    pub age: Option<i32>,
    /// Canonical feet-and-inches form, e.g. `5'9"`
    pub height: Option<String>,
    pub weight: Option<f64>,
    pub experience_level: Option<String>,
    pub workout_frequency: Option<String>,
    pub equipment: Option<String>,
    pub session_length: Option<String>,
    pub theme: Option<Theme>,
    /// Share code assigned at signup; never changes
    pub friend_code: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl UserEntity {
    /// Initials for avatar fallback, from name or email
    pub fn initials(&self) -> String {
        let source = if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        };

        source
            .trim()
            .split_whitespace()
            .take(2)
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}
