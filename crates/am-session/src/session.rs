use crate::field_group::{
    AvatarGroup, EmailGroup, FieldGroup, FieldGroupController, NameGroup, PasswordGroup,
    StatsGroup, ThemeGroup,
};
use crate::hydrator::{EntityHydrator, HydrationOutcome};
use crate::identity::IdentityStore;
use crate::relationships::RelationshipSync;
use crate::user_cache::UserCache;
use crate::{Result, SessionError};

use std::sync::Arc;

use am_client::RemoteAuthority;
use am_core::{UserEntity, UserId};

use log::info;

/// Owner of the synchronization core: the persisted identity, the shared
/// user cache, and the hydrator, plus constructors for the per-group
/// controllers and the relationship lists.
pub struct Session<R: RemoteAuthority> {
    remote: Arc<R>,
    store: Arc<IdentityStore>,
    cache: UserCache,
    hydrator: EntityHydrator<R>,
}

impl<R: RemoteAuthority> Session<R> {
    pub fn new(remote: R, store: IdentityStore) -> Self {
        let remote = Arc::new(remote);
        let store = Arc::new(store);
        let cache = UserCache::new();
        let hydrator = EntityHydrator::new(Arc::clone(&remote), cache.clone(), Arc::clone(&store));

        Self {
            remote,
            store,
            cache,
            hydrator,
        }
    }

    pub fn cache(&self) -> &UserCache {
        &self.cache
    }

    /// Clone of the cached current user, if authenticated and hydrated
    pub fn current_user(&self) -> Option<UserEntity> {
        self.cache.snapshot()
    }

    /// Restore the persisted identity and hydrate it.
    ///
    /// Returns `None` when no identity is stored (or the stored value was
    /// corrupt and healed away), or when this cycle was superseded.
    pub async fn restore(&self) -> Result<Option<UserEntity>> {
        let Some(user) = self.store.restore()? else {
            return Ok(None);
        };

        match self.hydrator.hydrate(user).await? {
            HydrationOutcome::Hydrated(entity) => Ok(Some(entity)),
            HydrationOutcome::Superseded => Ok(None),
        }
    }

    /// Persist a freshly authenticated identity and hydrate it. Called
    /// after external login/signup succeeds.
    pub async fn establish(&self, user: UserId) -> Result<Option<UserEntity>> {
        self.store.persist(user)?;

        match self.hydrator.hydrate(user).await? {
            HydrationOutcome::Hydrated(entity) => Ok(Some(entity)),
            HydrationOutcome::Superseded => Ok(None),
        }
    }

    /// Re-hydrate the current identity, replacing the cache with fresh
    /// server truth (e.g., on window focus). Unauthenticated sessions
    /// have nothing to refresh.
    pub async fn refresh(&self) -> Result<Option<UserEntity>> {
        let Some(current) = self.cache.snapshot() else {
            return Ok(None);
        };

        match self.hydrator.hydrate(current.id).await? {
            HydrationOutcome::Hydrated(entity) => Ok(Some(entity)),
            HydrationOutcome::Superseded => Ok(None),
        }
    }

    /// Tear down the session: stale in-flight hydrations, clear the
    /// persisted identity, empty the cache.
    pub fn logout(&self) -> Result<()> {
        self.hydrator.invalidate();
        self.store.clear()?;
        self.cache.update(None);
        info!("Session ended");
        Ok(())
    }

    // =========================================================================
    // Controllers
    // =========================================================================

    fn controller<G: FieldGroup>(&self) -> Result<FieldGroupController<G, R>> {
        let user = self
            .cache
            .snapshot()
            .ok_or_else(SessionError::not_authenticated)?;

        Ok(FieldGroupController::new(
            user.id,
            Arc::clone(&self.remote),
            self.cache.clone(),
        ))
    }

    pub fn name_editor(&self) -> Result<FieldGroupController<NameGroup, R>> {
        self.controller()
    }

    pub fn email_editor(&self) -> Result<FieldGroupController<EmailGroup, R>> {
        self.controller()
    }

    pub fn password_editor(&self) -> Result<FieldGroupController<PasswordGroup, R>> {
        self.controller()
    }

    pub fn stats_editor(&self) -> Result<FieldGroupController<StatsGroup, R>> {
        self.controller()
    }

    pub fn avatar_editor(&self) -> Result<FieldGroupController<AvatarGroup, R>> {
        self.controller()
    }

    pub fn theme_editor(&self) -> Result<FieldGroupController<ThemeGroup, R>> {
        self.controller()
    }

    /// Relationship lists keyed to the current identity
    pub fn relationships(&self) -> Result<RelationshipSync<R>> {
        let user = self
            .cache
            .snapshot()
            .ok_or_else(SessionError::not_authenticated)?;

        Ok(RelationshipSync::new(user.id, Arc::clone(&self.remote)))
    }
}
