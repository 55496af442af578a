//! Scripted in-process remote for exercising the synchronization core
//! without a network. Each operation pops the next script from its
//! queue (or falls back to a benign success) and can be gated on a
//! oneshot so tests control exactly when an in-flight call settles.

use std::collections::VecDeque;
use std::sync::Mutex;

use am_client::{AccountPatch, RemoteAuthority, RemoteError, RemoteResult};
use am_core::{FriendEntry, PendingRequest, RequestAck, Theme, UserEntity, UserId};

use bytes::Bytes;
use tokio::sync::oneshot;

pub(crate) fn user(id: UserId) -> UserEntity {
    UserEntity {
        id,
        email: format!("user{id}@example.com"),
        name: format!("User {id}"),
        avatar_url: None,
        age: Some(28),
        height: Some("5'9\"".to_string()),
        weight: Some(170.0),
        experience_level: None,
        workout_frequency: None,
        equipment: None,
        session_length: None,
        theme: Some(Theme::Dark),
        friend_code: Some(format!("U{id}-CODE")),
        created_at: None,
    }
}

pub(crate) fn friend(id: UserId, name: &str, code: &str) -> FriendEntry {
    FriendEntry {
        id,
        name: name.to_string(),
        friend_code: code.to_string(),
        avatar_url: None,
    }
}

pub(crate) fn request(id: UserId) -> PendingRequest {
    PendingRequest {
        id,
        name: format!("Requester {id}"),
        friend_code: format!("R{id}-CODE"),
    }
}

pub(crate) fn auth_error() -> RemoteError {
    RemoteError::from_status(401, "Session expired.".to_string())
}

pub(crate) fn network_error() -> RemoteError {
    RemoteError::network("connection refused")
}

pub(crate) fn not_found_error() -> RemoteError {
    RemoteError::from_status(404, "Request not found.".to_string())
}

pub(crate) fn conflict_error() -> RemoteError {
    RemoteError::from_status(409, "Email already registered".to_string())
}

/// One scripted response, optionally held until the test releases it.
pub(crate) struct Script<T> {
    result: RemoteResult<T>,
    release: Option<oneshot::Receiver<()>>,
}

impl<T> Script<T> {
    pub(crate) fn ok(value: T) -> Self {
        Script {
            result: Ok(value),
            release: None,
        }
    }

    pub(crate) fn err(error: RemoteError) -> Self {
        Script {
            result: Err(error),
            release: None,
        }
    }

    /// Script whose resolution waits for the returned sender
    pub(crate) fn gated(result: RemoteResult<T>) -> (Self, oneshot::Sender<()>) {
        let (tx, rx) = oneshot::channel();
        (
            Script {
                result,
                release: Some(rx),
            },
            tx,
        )
    }
}

async fn play<T>(queue: &Mutex<VecDeque<Script<T>>>, fallback: RemoteResult<T>) -> RemoteResult<T> {
    let script = queue.lock().unwrap().pop_front();
    match script {
        Some(Script { result, release }) => {
            if let Some(rx) = release {
                let _ = rx.await;
            }
            result
        }
        None => fallback,
    }
}

#[derive(Default)]
pub(crate) struct MockRemote {
    calls: Mutex<Vec<String>>,
    pub(crate) fetch_user: Mutex<VecDeque<Script<UserEntity>>>,
    pub(crate) update_account: Mutex<VecDeque<Script<UserEntity>>>,
    pub(crate) change_email: Mutex<VecDeque<Script<UserEntity>>>,
    pub(crate) change_password: Mutex<VecDeque<Script<UserEntity>>>,
    pub(crate) update_theme: Mutex<VecDeque<Script<UserEntity>>>,
    pub(crate) upload_avatar: Mutex<VecDeque<Script<String>>>,
    pub(crate) list_friends: Mutex<VecDeque<Script<Vec<FriendEntry>>>>,
    pub(crate) list_pending: Mutex<VecDeque<Script<Vec<PendingRequest>>>>,
    pub(crate) send_request: Mutex<VecDeque<Script<RequestAck>>>,
    pub(crate) accept: Mutex<VecDeque<Script<()>>>,
    pub(crate) decline: Mutex<VecDeque<Script<()>>>,
    pub(crate) remove_friend: Mutex<VecDeque<Script<()>>>,
}

impl MockRemote {
    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn call_count(&self, op: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| call.starts_with(op))
            .count()
    }
}

impl RemoteAuthority for MockRemote {
    async fn fetch_user(&self, user_id: UserId) -> RemoteResult<UserEntity> {
        self.record(format!("fetch_user({user_id})"));
        play(&self.fetch_user, Ok(user(user_id))).await
    }

    async fn update_account(
        &self,
        user_id: UserId,
        patch: AccountPatch,
    ) -> RemoteResult<UserEntity> {
        let body = serde_json::to_string(&patch).unwrap();
        self.record(format!("update_account({user_id}, {body})"));
        play(&self.update_account, Ok(user(user_id))).await
    }

    async fn change_email(
        &self,
        user_id: UserId,
        email: &str,
        _current_password: &str,
    ) -> RemoteResult<UserEntity> {
        self.record(format!("change_email({user_id}, {email})"));
        play(&self.change_email, Ok(user(user_id))).await
    }

    async fn change_password(
        &self,
        user_id: UserId,
        _old_password: &str,
        _new_password: &str,
    ) -> RemoteResult<UserEntity> {
        self.record(format!("change_password({user_id})"));
        play(&self.change_password, Ok(user(user_id))).await
    }

    async fn update_theme(&self, user_id: UserId, theme: Theme) -> RemoteResult<UserEntity> {
        self.record(format!("update_theme({user_id}, {theme})"));
        play(&self.update_theme, Ok(user(user_id))).await
    }

    async fn upload_avatar(
        &self,
        user_id: UserId,
        bytes: Bytes,
        content_type: &str,
    ) -> RemoteResult<String> {
        self.record(format!(
            "upload_avatar({user_id}, {} bytes, {content_type})",
            bytes.len()
        ));
        play(&self.upload_avatar, Ok("/uploads/avatar.png".to_string())).await
    }

    async fn list_friends(&self, user_id: UserId) -> RemoteResult<Vec<FriendEntry>> {
        self.record(format!("list_friends({user_id})"));
        play(&self.list_friends, Ok(Vec::new())).await
    }

    async fn list_pending(&self, user_id: UserId) -> RemoteResult<Vec<PendingRequest>> {
        self.record(format!("list_pending({user_id})"));
        play(&self.list_pending, Ok(Vec::new())).await
    }

    async fn send_request(&self, user_id: UserId, code: &str) -> RemoteResult<RequestAck> {
        self.record(format!("send_request({user_id}, {code})"));
        play(
            &self.send_request,
            Ok(RequestAck {
                ok: true,
                message: None,
                target_name: None,
            }),
        )
        .await
    }

    async fn accept(&self, user_id: UserId, other: UserId) -> RemoteResult<()> {
        self.record(format!("accept({user_id}, {other})"));
        play(&self.accept, Ok(())).await
    }

    async fn decline(&self, user_id: UserId, other: UserId) -> RemoteResult<()> {
        self.record(format!("decline({user_id}, {other})"));
        play(&self.decline, Ok(())).await
    }

    async fn remove_friend(&self, user_id: UserId, other: UserId) -> RemoteResult<()> {
        self.record(format!("remove_friend({user_id}, {other})"));
        play(&self.remove_friend, Ok(())).await
    }
}
