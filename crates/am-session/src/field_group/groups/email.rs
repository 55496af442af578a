use crate::field_group::{FieldGroup, ReconcileMode};

use am_client::{RemoteAuthority, RemoteResult};
use am_core::{EmailDraft, UserEntity, UserId};

/// Email group. The address is normalized before submission and the
/// change is re-authenticated with the current password.
pub struct EmailGroup;

impl FieldGroup for EmailGroup {
    type Draft = EmailDraft;

    const NAME: &'static str = "email";
    const MODE: ReconcileMode = ReconcileMode::Pessimistic;

    fn draft_from(entity: &UserEntity) -> EmailDraft {
        EmailDraft::from_entity(entity)
    }

    fn validate(draft: &EmailDraft) -> am_core::Result<()> {
        draft.validate()
    }

    fn push<R: RemoteAuthority>(
        remote: &R,
        user: UserId,
        draft: &EmailDraft,
        _current: &UserEntity,
    ) -> impl Future<Output = RemoteResult<UserEntity>> + Send {
        let email = draft.normalized();
        let password = draft.current_password.clone();
        async move { remote.change_email(user, &email, &password).await }
    }
}
