//! Per-field-group draft types.
//!
//! A draft holds the in-progress edited values for one group of account
//! fields. It exists only while that group is being edited or submitted,
//! and it owns the group's local validation: a draft that fails
//! `validate()` must never reach the network.

pub mod avatar_draft;
pub mod email_draft;
pub mod name_draft;
pub mod password_draft;
pub mod stats_draft;
pub mod theme_draft;

pub const MAX_NAME_LEN: usize = 100;
pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_AGE: i32 = 13;
pub const MAX_AGE: i32 = 120;
pub const MIN_WEIGHT: f64 = 50.0;
pub const MAX_WEIGHT: f64 = 500.0;
pub const MAX_AVATAR_BYTES: usize = 5 * 1024 * 1024;

/// Trim plus lowercase, applied to emails before comparison or submission
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Minimal shape check: `local@domain.tld` with non-empty parts
pub fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
