use crate::field_group::{FieldGroup, ReconcileMode};

use am_client::{AccountPatch, RemoteAuthority, RemoteResult};
use am_core::{StatsDraft, UserEntity, UserId};

/// Physical-stats group (age, height, weight). Height is edited as
/// feet/inches and submitted in the canonical string form.
pub struct StatsGroup;

impl FieldGroup for StatsGroup {
    type Draft = StatsDraft;

    const NAME: &'static str = "stats";
    const MODE: ReconcileMode = ReconcileMode::Pessimistic;

    fn draft_from(entity: &UserEntity) -> StatsDraft {
        StatsDraft::from_entity(entity)
    }

    fn validate(draft: &StatsDraft) -> am_core::Result<()> {
        draft.validate()
    }

    fn push<R: RemoteAuthority>(
        remote: &R,
        user: UserId,
        draft: &StatsDraft,
        _current: &UserEntity,
    ) -> impl Future<Output = RemoteResult<UserEntity>> + Send {
        // Validation already ran; an inconsistent height cannot get here
        let height = draft.height().ok().flatten().map(|h| h.to_string());

        let patch = AccountPatch {
            age: draft.age,
            height,
            weight: draft.weight,
            ..AccountPatch::default()
        };
        remote.update_account(user, patch)
    }
}
