use std::sync::{Arc, RwLock};

use am_core::UserEntity;

use log::debug;

/// The one shared current-user record.
///
/// Every controller reads through `snapshot()` and writes through
/// `update()`; there are no other mutation paths. The record is replaced
/// as a whole unit, never partially aliased.
#[derive(Clone, Default)]
pub struct UserCache {
    inner: Arc<RwLock<Option<UserEntity>>>,
}

impl UserCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clone of the cached record, if any
    pub fn snapshot(&self) -> Option<UserEntity> {
        self.inner.read().unwrap().clone()
    }

    /// The single mutation entry point
    pub fn update(&self, next: Option<UserEntity>) {
        match &next {
            Some(user) => debug!("User cache updated for id {}", user.id),
            None => debug!("User cache emptied"),
        }
        *self.inner.write().unwrap() = next;
    }
}
