use crate::field_group::{FieldGroup, ReconcileMode};

use am_client::{AccountPatch, RemoteAuthority, RemoteResult};
use am_core::{NameDraft, UserEntity, UserId};

/// Display-name group.
pub struct NameGroup;

impl FieldGroup for NameGroup {
    type Draft = NameDraft;

    const NAME: &'static str = "name";
    const MODE: ReconcileMode = ReconcileMode::Pessimistic;

    fn draft_from(entity: &UserEntity) -> NameDraft {
        NameDraft::from_entity(entity)
    }

    fn validate(draft: &NameDraft) -> am_core::Result<()> {
        draft.validate()
    }

    fn push<R: RemoteAuthority>(
        remote: &R,
        user: UserId,
        draft: &NameDraft,
        _current: &UserEntity,
    ) -> impl Future<Output = RemoteResult<UserEntity>> + Send {
        let patch = AccountPatch {
            name: Some(draft.normalized()),
            ..AccountPatch::default()
        };
        remote.update_account(user, patch)
    }
}
