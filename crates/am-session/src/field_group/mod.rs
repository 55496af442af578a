pub(crate) mod groups;
pub(crate) mod state;

pub use groups::{AvatarGroup, EmailGroup, NameGroup, PasswordGroup, StatsGroup, ThemeGroup};
pub use state::{GroupStatus, ReconcileMode};

use crate::field_group::state::{EditState, SAVED_ACK_TTL};
use crate::user_cache::UserCache;
use crate::{Result, SessionError};

use std::sync::{Arc, Mutex};

use am_client::{RemoteAuthority, RemoteResult};
use am_core::{UserEntity, UserId};

use log::{debug, info, warn};
use tokio::time::Instant;

/// One logical group of editable account fields sharing a single
/// edit/submit lifecycle.
///
/// The controller owns the lifecycle; a group supplies its draft type,
/// its reconciliation mode, local validation, and the remote call that
/// commits it.
pub trait FieldGroup {
    type Draft: Clone + Send + Sync;

    const NAME: &'static str;
    const MODE: ReconcileMode;

    /// Initialize a draft from the cached record
    fn draft_from(entity: &UserEntity) -> Self::Draft;

    /// Local synchronous validation; a failure here never reaches the
    /// network
    fn validate(draft: &Self::Draft) -> am_core::Result<()>;

    /// Apply the draft onto the record ahead of confirmation. Only
    /// optimistic groups override this.
    fn apply(_draft: &Self::Draft, _entity: &mut UserEntity) {}

    /// Submit the draft to the remote authority, returning the canonical
    /// record
    fn push<R: RemoteAuthority>(
        remote: &R,
        user: UserId,
        draft: &Self::Draft,
        current: &UserEntity,
    ) -> impl Future<Output = RemoteResult<UserEntity>> + Send;
}

/// Edit-lifecycle controller for one field group.
///
/// Submissions are strictly serialized per controller: a second
/// `submit()` while one is in flight is rejected synchronously, with no
/// network call. Distinct controllers are independent of each other and
/// all write the shared cache through its single entry point.
pub struct FieldGroupController<G: FieldGroup, R: RemoteAuthority> {
    user: UserId,
    remote: Arc<R>,
    cache: UserCache,
    state: Mutex<EditState<G::Draft>>,
}

impl<G: FieldGroup, R: RemoteAuthority> FieldGroupController<G, R> {
    pub(crate) fn new(user: UserId, remote: Arc<R>, cache: UserCache) -> Self {
        Self {
            user,
            remote,
            cache,
            state: Mutex::new(EditState::idle()),
        }
    }

    /// Open a draft initialized from the cached record. A no-op while
    /// already editing; rejected while a submission is in flight.
    pub fn begin_edit(&self) -> Result<()> {
        let current = self
            .cache
            .snapshot()
            .ok_or_else(SessionError::not_authenticated)?;

        let mut state = self.state.lock().unwrap();
        match &*state {
            EditState::Viewing { .. } => {
                debug!("{}: editing started", G::NAME);
                *state = EditState::Editing {
                    draft: G::draft_from(&current),
                    error: None,
                };
                Ok(())
            }
            EditState::Editing { .. } => Ok(()),
            EditState::Submitting { .. } => Err(SessionError::submit_in_flight(G::NAME)),
        }
    }

    /// Mutate the open draft; permitted only while editing.
    pub fn update_draft(&self, mutate: impl FnOnce(&mut G::Draft)) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        match &mut *state {
            EditState::Editing { draft, .. } => {
                mutate(draft);
                Ok(())
            }
            _ => Err(SessionError::not_editing(G::NAME)),
        }
    }

    /// Discard the draft and return to viewing. No network call.
    pub fn cancel(&self) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        match &*state {
            EditState::Editing { .. } => {
                debug!("{}: edit cancelled", G::NAME);
                *state = EditState::idle();
                Ok(())
            }
            EditState::Submitting { .. } => Err(SessionError::submit_in_flight(G::NAME)),
            EditState::Viewing { .. } => Ok(()),
        }
    }

    /// Validate and submit the open draft.
    ///
    /// Validation failures stay local: the state remains Editing with the
    /// error attached and nothing is sent. On a pessimistic group the
    /// cache is only touched after the remote confirms; on an optimistic
    /// group it is updated immediately and rolled back on failure.
    pub async fn submit(&self) -> Result<()> {
        let current = self
            .cache
            .snapshot()
            .ok_or_else(SessionError::not_authenticated)?;

        let (draft, rollback) = {
            let mut state = self.state.lock().unwrap();

            let draft = match &*state {
                EditState::Submitting { .. } => {
                    return Err(SessionError::submit_in_flight(G::NAME));
                }
                EditState::Viewing { .. } => return Err(SessionError::not_editing(G::NAME)),
                EditState::Editing { draft, .. } => draft.clone(),
            };

            if let Err(err) = G::validate(&draft) {
                debug!("{}: rejected locally: {err}", G::NAME);
                *state = EditState::Editing {
                    draft,
                    error: Some(err.message()),
                };
                return Err(SessionError::from(err));
            }

            let rollback = match G::MODE {
                ReconcileMode::Optimistic => {
                    let mut next = current.clone();
                    G::apply(&draft, &mut next);
                    self.cache.update(Some(next));
                    Some(current.clone())
                }
                ReconcileMode::Pessimistic => None,
            };

            *state = EditState::Submitting {
                draft: draft.clone(),
                rollback: rollback.clone(),
            };

            (draft, rollback)
        };

        debug!("{}: submitting", G::NAME);
        let result = G::push(self.remote.as_ref(), self.user, &draft, &current).await;

        let mut state = self.state.lock().unwrap();
        match result {
            Ok(entity) => {
                if G::MODE == ReconcileMode::Pessimistic {
                    self.cache.update(Some(entity));
                }
                *state = EditState::Viewing {
                    saved_at: Some(Instant::now()),
                };
                info!("{}: saved", G::NAME);
                Ok(())
            }
            Err(err) => {
                if let Some(snapshot) = rollback {
                    self.cache.update(Some(snapshot));
                }
                warn!("{}: save failed: {err}", G::NAME);
                let message = err.message().to_string();
                *state = EditState::Editing {
                    draft,
                    error: Some(message),
                };
                Err(SessionError::from(err))
            }
        }
    }

    /// Current lifecycle state. The saved acknowledgment reads true only
    /// within its fixed window after a commit.
    pub fn status(&self) -> GroupStatus {
        match &*self.state.lock().unwrap() {
            EditState::Viewing { saved_at } => GroupStatus::Viewing {
                just_saved: saved_at.is_some_and(|at| at.elapsed() < SAVED_ACK_TTL),
            },
            EditState::Editing { error, .. } => GroupStatus::Editing {
                error: error.clone(),
            },
            EditState::Submitting { .. } => GroupStatus::Submitting,
        }
    }

    /// Clone of the open draft, if editing or submitting
    pub fn draft(&self) -> Option<G::Draft> {
        match &*self.state.lock().unwrap() {
            EditState::Editing { draft, .. } | EditState::Submitting { draft, .. } => {
                Some(draft.clone())
            }
            EditState::Viewing { .. } => None,
        }
    }
}
