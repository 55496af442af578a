use std::time::Duration;

use am_core::UserEntity;

use tokio::time::Instant;

/// How long the saved acknowledgment stays visible after a commit
pub(crate) const SAVED_ACK_TTL: Duration = Duration::from_millis(1200);

/// Reconciliation mode for one field group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileMode {
    /// Cache untouched until the remote confirms; success replaces it
    /// with the server-returned canonical record
    Pessimistic,
    /// Cache mutated before confirmation; failure rolls back to the
    /// pre-submission snapshot
    Optimistic,
}

/// Edit lifecycle for one field group. One tagged state instead of
/// independent editing/saving/error flags; impossible combinations
/// cannot be represented.
#[derive(Debug)]
pub(crate) enum EditState<D> {
    /// No edit in progress; `saved_at` carries the transient
    /// acknowledgment of the last commit
    Viewing { saved_at: Option<Instant> },
    /// Draft open for changes; `error` holds the last rejection
    Editing { draft: D, error: Option<String> },
    /// One submission in flight; `rollback` is the pre-submission cache
    /// snapshot for optimistic groups
    Submitting {
        draft: D,
        rollback: Option<UserEntity>,
    },
}

impl<D> EditState<D> {
    pub(crate) fn idle() -> Self {
        EditState::Viewing { saved_at: None }
    }
}

/// Snapshot of a controller's state for consumers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupStatus {
    Viewing { just_saved: bool },
    Editing { error: Option<String> },
    Submitting,
}
