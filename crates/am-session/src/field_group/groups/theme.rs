use crate::field_group::{FieldGroup, ReconcileMode};

use am_client::{RemoteAuthority, RemoteResult};
use am_core::{ThemeDraft, UserEntity, UserId};

/// Appearance group - the single optimistic field. The cached record
/// flips before the remote confirms so the whole UI re-skins at once; a
/// failure rolls it back to the snapshot.
pub struct ThemeGroup;

impl FieldGroup for ThemeGroup {
    type Draft = ThemeDraft;

    const NAME: &'static str = "theme";
    const MODE: ReconcileMode = ReconcileMode::Optimistic;

    fn draft_from(entity: &UserEntity) -> ThemeDraft {
        ThemeDraft::from_entity(entity)
    }

    fn validate(draft: &ThemeDraft) -> am_core::Result<()> {
        draft.validate()
    }

    fn apply(draft: &ThemeDraft, entity: &mut UserEntity) {
        entity.theme = Some(draft.theme);
    }

    fn push<R: RemoteAuthority>(
        remote: &R,
        user: UserId,
        draft: &ThemeDraft,
        _current: &UserEntity,
    ) -> impl Future<Output = RemoteResult<UserEntity>> + Send {
        remote.update_theme(user, draft.theme)
    }
}
