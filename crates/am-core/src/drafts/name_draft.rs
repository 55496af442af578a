use crate::drafts::MAX_NAME_LEN;
use crate::{CoreError, UserEntity};

/// Draft for the display-name group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameDraft {
    pub name: String,
}

impl NameDraft {
    pub fn from_entity(entity: &UserEntity) -> Self {
        NameDraft {
            name: entity.name.clone(),
        }
    }

    /// Trimmed value as it will be submitted
    pub fn normalized(&self) -> String {
        self.name.trim().to_string()
    }

    pub fn validate(&self) -> crate::Result<()> {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            return Err(CoreError::validation("Name is required."));
        }
        if trimmed.chars().count() > MAX_NAME_LEN {
            return Err(CoreError::validation(format!(
                "Name must be at most {MAX_NAME_LEN} characters."
            )));
        }
        Ok(())
    }
}
