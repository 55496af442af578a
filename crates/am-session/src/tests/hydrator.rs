//! Hydration-cycle ordering and fail-closed behavior.

use crate::hydrator::{EntityHydrator, HydrationOutcome};
use crate::identity::IdentityStore;
use crate::tests::support::{MockRemote, Script, auth_error, network_error, user};
use crate::user_cache::UserCache;

use std::sync::Arc;

fn hydrator_fixture(
    dir: &tempfile::TempDir,
) -> (
    Arc<MockRemote>,
    UserCache,
    Arc<IdentityStore>,
    EntityHydrator<MockRemote>,
) {
    let remote = Arc::new(MockRemote::default());
    let cache = UserCache::new();
    let store = Arc::new(IdentityStore::new(dir.path().join("identity.json")));
    let hydrator = EntityHydrator::new(Arc::clone(&remote), cache.clone(), Arc::clone(&store));
    (remote, cache, store, hydrator)
}

#[tokio::test]
async fn test_successful_hydration_commits_to_cache() {
    let dir = tempfile::tempdir().unwrap();
    let (_remote, cache, _store, hydrator) = hydrator_fixture(&dir);

    let outcome = hydrator.hydrate(7).await.unwrap();

    assert_eq!(outcome, HydrationOutcome::Hydrated(user(7)));
    assert_eq!(cache.snapshot(), Some(user(7)));
}

#[tokio::test]
async fn test_superseded_cycle_never_commits() {
    let dir = tempfile::tempdir().unwrap();
    let (remote, cache, _store, hydrator) = hydrator_fixture(&dir);

    // Cycle A resolves only when released; cycle B resolves immediately
    let (script_a, release_a) = Script::gated(Ok(user(1)));
    remote.fetch_user.lock().unwrap().push_back(script_a);
    remote
        .fetch_user
        .lock()
        .unwrap()
        .push_back(Script::ok(user(2)));

    // Tokens are captured here, before either future is polled
    let cycle_a = hydrator.hydrate(1);
    let cycle_b = hydrator.hydrate(2);

    let (outcome_a, outcome_b, ()) = tokio::join!(cycle_a, cycle_b, async {
        // B has committed by the time A is released
        release_a.send(()).unwrap();
    });

    assert_eq!(outcome_b.unwrap(), HydrationOutcome::Hydrated(user(2)));
    assert_eq!(outcome_a.unwrap(), HydrationOutcome::Superseded);
    assert_eq!(cache.snapshot(), Some(user(2)), "A must never overwrite B");
}

#[tokio::test]
async fn test_authorization_failure_fails_closed() {
    let dir = tempfile::tempdir().unwrap();
    let (remote, cache, store, hydrator) = hydrator_fixture(&dir);

    store.persist(7).unwrap();
    remote
        .fetch_user
        .lock()
        .unwrap()
        .push_back(Script::err(auth_error()));

    let err = hydrator.hydrate(7).await.unwrap_err();

    assert!(err.is_authorization());
    assert_eq!(cache.snapshot(), None);
    assert_eq!(
        store.restore().unwrap(),
        None,
        "identity must be cleared on rejection"
    );
}

#[tokio::test]
async fn test_network_failure_keeps_identity() {
    let dir = tempfile::tempdir().unwrap();
    let (remote, cache, store, hydrator) = hydrator_fixture(&dir);

    store.persist(7).unwrap();
    remote
        .fetch_user
        .lock()
        .unwrap()
        .push_back(Script::err(network_error()));

    let err = hydrator.hydrate(7).await.unwrap_err();

    assert!(!err.is_authorization());
    assert_eq!(cache.snapshot(), None);
    assert_eq!(
        store.restore().unwrap(),
        Some(7),
        "transient failures must not log the user out"
    );
}

#[tokio::test]
async fn test_stale_authorization_failure_is_dropped_silently() {
    let dir = tempfile::tempdir().unwrap();
    let (remote, cache, store, hydrator) = hydrator_fixture(&dir);

    store.persist(2).unwrap();
    let (script_a, release_a) = Script::gated(Err(auth_error()));
    remote.fetch_user.lock().unwrap().push_back(script_a);
    remote
        .fetch_user
        .lock()
        .unwrap()
        .push_back(Script::ok(user(2)));

    let cycle_a = hydrator.hydrate(1);
    let cycle_b = hydrator.hydrate(2);

    let (outcome_a, outcome_b, ()) = tokio::join!(cycle_a, cycle_b, async {
        release_a.send(()).unwrap();
    });

    // The stale rejection is not an error and tears nothing down
    assert_eq!(outcome_a.unwrap(), HydrationOutcome::Superseded);
    assert_eq!(outcome_b.unwrap(), HydrationOutcome::Hydrated(user(2)));
    assert_eq!(cache.snapshot(), Some(user(2)));
    assert_eq!(store.restore().unwrap(), Some(2));
}

#[tokio::test]
async fn test_invalidate_stales_in_flight_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let (remote, cache, _store, hydrator) = hydrator_fixture(&dir);

    let (script, release) = Script::gated(Ok(user(7)));
    remote.fetch_user.lock().unwrap().push_back(script);

    let cycle = hydrator.hydrate(7);

    let (outcome, ()) = tokio::join!(cycle, async {
        hydrator.invalidate();
        release.send(()).unwrap();
    });

    assert_eq!(outcome.unwrap(), HydrationOutcome::Superseded);
    assert_eq!(cache.snapshot(), None);
}
