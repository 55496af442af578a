use crate::field_group::{FieldGroup, ReconcileMode};

use am_client::{RemoteAuthority, RemoteResult};
use am_core::{PasswordDraft, UserEntity, UserId};

/// Password group. The draft never initializes from the record and its
/// fields never echo back into the cache.
pub struct PasswordGroup;

impl FieldGroup for PasswordGroup {
    type Draft = PasswordDraft;

    const NAME: &'static str = "password";
    const MODE: ReconcileMode = ReconcileMode::Pessimistic;

    fn draft_from(entity: &UserEntity) -> PasswordDraft {
        PasswordDraft::from_entity(entity)
    }

    fn validate(draft: &PasswordDraft) -> am_core::Result<()> {
        draft.validate()
    }

    fn push<R: RemoteAuthority>(
        remote: &R,
        user: UserId,
        draft: &PasswordDraft,
        _current: &UserEntity,
    ) -> impl Future<Output = RemoteResult<UserEntity>> + Send {
        let old = draft.old_password.clone();
        let new = draft.new_password.clone();
        async move { remote.change_password(user, &old, &new).await }
    }
}
