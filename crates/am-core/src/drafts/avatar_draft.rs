use crate::drafts::MAX_AVATAR_BYTES;
use crate::{CoreError, UserEntity};

const ALLOWED_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/webp"];

/// Draft for the avatar group: the picked image, pending upload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AvatarDraft {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

impl AvatarDraft {
    pub fn from_entity(_entity: &UserEntity) -> Self {
        AvatarDraft::default()
    }

    pub fn validate(&self) -> crate::Result<()> {
        if self.bytes.is_empty() {
            return Err(CoreError::validation("Please choose an image file."));
        }
        if !ALLOWED_TYPES.contains(&self.content_type.as_str()) {
            return Err(CoreError::validation(
                "Please upload a JPG, PNG, or WebP image.",
            ));
        }
        if self.bytes.len() > MAX_AVATAR_BYTES {
            return Err(CoreError::validation("Image too large (max 5MB)."));
        }
        Ok(())
    }
}
