use crate::{Theme, UserEntity};

/// Draft for the theme group - the single optimistic field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeDraft {
    pub theme: Theme,
}

impl ThemeDraft {
    pub fn from_entity(entity: &UserEntity) -> Self {
        ThemeDraft {
            theme: entity.theme.unwrap_or(Theme::Dark),
        }
    }

    pub fn validate(&self) -> crate::Result<()> {
        // Theme is an enum; there is nothing left to check locally
        Ok(())
    }
}
