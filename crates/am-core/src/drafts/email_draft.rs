use crate::drafts::{is_plausible_email, normalize_email};
use crate::{CoreError, UserEntity};

/// Draft for the email group. Changing the address requires the account
/// password; the confirmation field guards against typos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailDraft {
    pub email: String,
    pub confirm_email: String,
    pub current_password: String,
}

impl EmailDraft {
    pub fn from_entity(entity: &UserEntity) -> Self {
        EmailDraft {
            email: entity.email.clone(),
            confirm_email: String::new(),
            current_password: String::new(),
        }
    }

    /// Normalized address as it will be submitted
    pub fn normalized(&self) -> String {
        normalize_email(&self.email)
    }

    pub fn validate(&self) -> crate::Result<()> {
        let email = normalize_email(&self.email);
        if email.is_empty() {
            return Err(CoreError::validation("Email is required."));
        }
        if !is_plausible_email(&email) {
            return Err(CoreError::validation("Please enter a valid email address."));
        }
        // Confirmation compares normalized forms; case differences are not typos
        if normalize_email(&self.confirm_email) != email {
            return Err(CoreError::validation("Email addresses do not match."));
        }
        if self.current_password.is_empty() {
            return Err(CoreError::validation(
                "Current password is required to change your email.",
            ));
        }
        Ok(())
    }
}
