use crate::RemoteResult;

use am_core::{FriendEntry, PendingRequest, RequestAck, Theme, UserEntity, UserId};

use bytes::Bytes;
use serde::Serialize;

/// Partial account fields for a single update call. Absent fields are
/// left untouched by the server.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workout_frequency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_length: Option<String>,
}

/// Operations the synchronization core consumes from the account service.
///
/// Every method is a suspension point; the caller regains control only
/// after the call settles. Implementations must not mutate any client
/// state - commits are the caller's job.
pub trait RemoteAuthority: Send + Sync {
    /// Resolve an identity into the canonical account record
    fn fetch_user(&self, user: UserId)
    -> impl Future<Output = RemoteResult<UserEntity>> + Send;

    /// Patch account fields, returning the canonical record
    fn update_account(
        &self,
        user: UserId,
        patch: AccountPatch,
    ) -> impl Future<Output = RemoteResult<UserEntity>> + Send;

    /// Change the account email; requires the current password
    fn change_email(
        &self,
        user: UserId,
        email: &str,
        current_password: &str,
    ) -> impl Future<Output = RemoteResult<UserEntity>> + Send;

    /// Change the account password
    fn change_password(
        &self,
        user: UserId,
        old_password: &str,
        new_password: &str,
    ) -> impl Future<Output = RemoteResult<UserEntity>> + Send;

    /// Persist the appearance preference
    fn update_theme(
        &self,
        user: UserId,
        theme: Theme,
    ) -> impl Future<Output = RemoteResult<UserEntity>> + Send;

    /// Upload a new avatar image, returning its reference
    fn upload_avatar(
        &self,
        user: UserId,
        bytes: Bytes,
        content_type: &str,
    ) -> impl Future<Output = RemoteResult<String>> + Send;

    /// Accepted connections for this account
    fn list_friends(
        &self,
        user: UserId,
    ) -> impl Future<Output = RemoteResult<Vec<FriendEntry>>> + Send;

    /// Incoming requests awaiting a decision
    fn list_pending(
        &self,
        user: UserId,
    ) -> impl Future<Output = RemoteResult<Vec<PendingRequest>>> + Send;

    /// Send a friend request by (already normalized) code
    fn send_request(
        &self,
        user: UserId,
        code: &str,
    ) -> impl Future<Output = RemoteResult<RequestAck>> + Send;

    /// Accept a pending request from `other`
    fn accept(&self, user: UserId, other: UserId)
    -> impl Future<Output = RemoteResult<()>> + Send;

    /// Decline a pending request from `other`; the edge is deleted
    fn decline(
        &self,
        user: UserId,
        other: UserId,
    ) -> impl Future<Output = RemoteResult<()>> + Send;

    /// Remove an accepted friend; the edge is deleted
    fn remove_friend(
        &self,
        user: UserId,
        other: UserId,
    ) -> impl Future<Output = RemoteResult<()>> + Send;
}
