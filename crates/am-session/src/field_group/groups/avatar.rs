use crate::field_group::{FieldGroup, ReconcileMode};

use am_client::{RemoteAuthority, RemoteResult};
use am_core::{AvatarDraft, UserEntity, UserId};

use bytes::Bytes;

/// Avatar group. The upload returns a reference; the canonical record is
/// the current one with that reference attached.
pub struct AvatarGroup;

impl FieldGroup for AvatarGroup {
    type Draft = AvatarDraft;

    const NAME: &'static str = "avatar";
    const MODE: ReconcileMode = ReconcileMode::Pessimistic;

    fn draft_from(entity: &UserEntity) -> AvatarDraft {
        AvatarDraft::from_entity(entity)
    }

    fn validate(draft: &AvatarDraft) -> am_core::Result<()> {
        draft.validate()
    }

    fn push<R: RemoteAuthority>(
        remote: &R,
        user: UserId,
        draft: &AvatarDraft,
        current: &UserEntity,
    ) -> impl Future<Output = RemoteResult<UserEntity>> + Send {
        let bytes = Bytes::from(draft.bytes.clone());
        let content_type = draft.content_type.clone();
        let mut updated = current.clone();

        async move {
            let avatar_url = remote.upload_avatar(user, bytes, &content_type).await?;
            updated.avatar_url = Some(avatar_url);
            Ok(updated)
        }
    }
}
