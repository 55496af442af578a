use crate::{Result, SessionError};

use std::sync::Arc;

use am_client::RemoteAuthority;
use am_core::{CoreError, FriendEntry, PendingRequest, RequestAck, UserId};

use log::{debug, info, warn};

/// Keeps the accepted-friends and incoming-requests projections fresh and
/// runs the four mutating operations over them.
///
/// Each list is owned exclusively by its own refresh/mutation cycle; a
/// failure on one list never touches the other. Errors are recorded
/// against the originating list, never retried automatically.
pub struct RelationshipSync<R: RemoteAuthority> {
    user: UserId,
    remote: Arc<R>,
    friends: Vec<FriendEntry>,
    friends_error: Option<String>,
    pending: Vec<PendingRequest>,
    pending_error: Option<String>,
    /// Armed friend id for the two-step removal confirmation
    pending_removal: Option<UserId>,
}

impl<R: RemoteAuthority> RelationshipSync<R> {
    pub(crate) fn new(user: UserId, remote: Arc<R>) -> Self {
        Self {
            user,
            remote,
            friends: Vec::new(),
            friends_error: None,
            pending: Vec::new(),
            pending_error: None,
            pending_removal: None,
        }
    }

    /// Trim and strip one leading `#` marker
    fn normalize_code(raw: &str) -> &str {
        let trimmed = raw.trim();
        trimmed.strip_prefix('#').unwrap_or(trimmed)
    }

    // =========================================================================
    // Refresh (view activation)
    // =========================================================================

    /// Fetch the accepted-friends list. On failure the list is cleared
    /// and the error attached; stale entries are never displayed.
    pub async fn refresh_friends(&mut self) -> Result<()> {
        match self.remote.list_friends(self.user).await {
            Ok(list) => {
                debug!("Loaded {} friends", list.len());
                self.friends = list;
                self.friends_error = None;
                Ok(())
            }
            Err(err) => {
                warn!("Friends refresh failed: {err}");
                self.friends.clear();
                self.friends_error = Some(err.message().to_string());
                Err(SessionError::from(err))
            }
        }
    }

    /// Fetch the incoming-requests list; same failure policy as
    /// `refresh_friends`.
    pub async fn refresh_pending(&mut self) -> Result<()> {
        match self.remote.list_pending(self.user).await {
            Ok(list) => {
                debug!("Loaded {} pending requests", list.len());
                self.pending = list;
                self.pending_error = None;
                Ok(())
            }
            Err(err) => {
                warn!("Pending-requests refresh failed: {err}");
                self.pending.clear();
                self.pending_error = Some(err.message().to_string());
                Err(SessionError::from(err))
            }
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Send a friend request by code. The code is normalized first; an
    /// empty result fails locally with no network call. Neither list is
    /// touched - the request only becomes visible on the counterparty's
    /// next refresh.
    pub async fn send_request_by_code(&mut self, raw_code: &str) -> Result<RequestAck> {
        let code = Self::normalize_code(raw_code);
        if code.is_empty() {
            return Err(SessionError::from(CoreError::validation(
                "Friend code is required.",
            )));
        }

        let ack = self.remote.send_request(self.user, code).await?;
        info!("Friend request sent to code {code}");
        Ok(ack)
    }

    /// Accept a pending request. Success removes the entry locally
    /// (a no-op if it is already gone); failure leaves the list as-is.
    pub async fn accept(&mut self, other: UserId) -> Result<()> {
        match self.remote.accept(self.user, other).await {
            Ok(()) => {
                info!("Accepted friend request from {other}");
                self.pending.retain(|request| request.id != other);
                self.pending_error = None;
                Ok(())
            }
            Err(err) => {
                warn!("Accept failed for {other}: {err}");
                self.pending_error = Some(err.message().to_string());
                Err(SessionError::from(err))
            }
        }
    }

    /// Decline a pending request; the edge is deleted outright.
    pub async fn decline(&mut self, other: UserId) -> Result<()> {
        match self.remote.decline(self.user, other).await {
            Ok(()) => {
                info!("Declined friend request from {other}");
                self.pending.retain(|request| request.id != other);
                self.pending_error = None;
                Ok(())
            }
            Err(err) => {
                warn!("Decline failed for {other}: {err}");
                self.pending_error = Some(err.message().to_string());
                Err(SessionError::from(err))
            }
        }
    }

    /// Arm the removal confirmation for `other`.
    pub fn begin_remove(&mut self, other: UserId) {
        self.pending_removal = Some(other);
    }

    /// Disarm the removal confirmation.
    pub fn cancel_remove(&mut self) {
        self.pending_removal = None;
    }

    /// Remove an accepted friend. Requires `begin_remove(other)` first;
    /// unconfirmed calls fail locally with no network call. The
    /// confirmation disarms after each attempt - a retry re-confirms.
    pub async fn remove(&mut self, other: UserId) -> Result<()> {
        if self.pending_removal != Some(other) {
            return Err(SessionError::removal_not_confirmed());
        }
        self.pending_removal = None;

        match self.remote.remove_friend(self.user, other).await {
            Ok(()) => {
                info!("Removed friend {other}");
                self.friends.retain(|friend| friend.id != other);
                self.friends_error = None;
                Ok(())
            }
            Err(err) => {
                warn!("Remove failed for {other}: {err}");
                self.friends_error = Some(err.message().to_string());
                Err(SessionError::from(err))
            }
        }
    }

    // =========================================================================
    // Projections
    // =========================================================================

    pub fn friends(&self) -> &[FriendEntry] {
        &self.friends
    }

    pub fn pending_requests(&self) -> &[PendingRequest] {
        &self.pending
    }

    pub fn friends_error(&self) -> Option<&str> {
        self.friends_error.as_deref()
    }

    pub fn pending_error(&self) -> Option<&str> {
        self.pending_error.as_deref()
    }

    /// Case-insensitive substring filter over name and code. Read-only;
    /// the underlying list is never touched.
    pub fn filter_friends(&self, query: &str) -> Vec<&FriendEntry> {
        self.friends
            .iter()
            .filter(|friend| friend.matches(query))
            .collect()
    }
}
