use crate::identity::IdentityStore;
use crate::user_cache::UserCache;
use crate::{Result, SessionError};

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use am_client::RemoteAuthority;
use am_core::{UserEntity, UserId};

use log::{debug, info, warn};

/// Outcome of one hydration cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum HydrationOutcome {
    /// This cycle was the most recent one and its result is now cached
    Hydrated(UserEntity),
    /// Another cycle started after this one; the result was dropped
    Superseded,
}

/// Resolves an identity into the authoritative user record, discarding
/// stale results.
///
/// Each call to `hydrate` captures a generation token before its fetch
/// starts. The token is compared again after the fetch settles; only the
/// most recently started cycle may commit to the cache. Superseded
/// results - successes and failures alike - are dropped silently. There
/// is no transport-level abort; stale cycles are client-ignored, never
/// server-cancelled.
pub struct EntityHydrator<R: RemoteAuthority> {
    remote: Arc<R>,
    cache: UserCache,
    store: Arc<IdentityStore>,
    generation: AtomicU64,
}

impl<R: RemoteAuthority> EntityHydrator<R> {
    pub fn new(remote: Arc<R>, cache: UserCache, store: Arc<IdentityStore>) -> Self {
        Self {
            remote,
            cache,
            store,
            generation: AtomicU64::new(0),
        }
    }

    /// Start a hydration cycle for `user`.
    ///
    /// The generation token is captured when this method is called, not
    /// when the returned future is first polled; starting a newer cycle
    /// immediately stales every earlier one.
    pub fn hydrate(&self, user: UserId) -> impl Future<Output = Result<HydrationOutcome>> + '_ {
        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("Hydration cycle {token} started for user {user}");

        async move {
            let result = self.remote.fetch_user(user).await;

            if self.generation.load(Ordering::SeqCst) != token {
                debug!("Hydration cycle {token} superseded; result dropped");
                return Ok(HydrationOutcome::Superseded);
            }

            match result {
                Ok(entity) => {
                    self.cache.update(Some(entity.clone()));
                    info!("Hydrated user {user} (cycle {token})");
                    Ok(HydrationOutcome::Hydrated(entity))
                }
                Err(err) if err.is_authorization() => {
                    // Fail closed: the remote no longer recognizes this
                    // identity, so the client must not keep it either.
                    warn!("Identity {user} rejected by remote; clearing session");
                    self.store.clear()?;
                    self.cache.update(None);
                    Err(SessionError::from(err))
                }
                Err(err) => {
                    warn!("Hydration cycle {token} failed for user {user}: {err}");
                    Err(SessionError::from(err))
                }
            }
        }
    }

    /// Stale every in-flight cycle (logout, identity teardown).
    pub fn invalidate(&self) {
        let next = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("Hydration generation advanced to {next}; in-flight cycles staled");
    }
}
