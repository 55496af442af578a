use crate::drafts::MIN_PASSWORD_LEN;
use crate::{CoreError, UserEntity};

/// Draft for the password group. Never initialized from the entity; all
/// three fields start empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PasswordDraft {
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordDraft {
    pub fn from_entity(_entity: &UserEntity) -> Self {
        PasswordDraft::default()
    }

    pub fn validate(&self) -> crate::Result<()> {
        if self.old_password.is_empty() {
            return Err(CoreError::validation("Current password is required."));
        }
        if self.new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(CoreError::validation(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters."
            )));
        }
        // Exact comparison; passwords are never normalized
        if self.confirm_password != self.new_password {
            return Err(CoreError::validation("Passwords do not match."));
        }
        Ok(())
    }
}
