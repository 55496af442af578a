//! Session facade: restore, establish, logout, controller wiring.

use crate::identity::IdentityStore;
use crate::session::Session;
use crate::tests::support::{MockRemote, Script, auth_error, user};
use crate::SessionError;

use std::fs;

fn session_in(dir: &tempfile::TempDir) -> Session<MockRemote> {
    let store = IdentityStore::new(dir.path().join("identity.json"));
    Session::new(MockRemote::default(), store)
}

#[tokio::test]
async fn test_restore_without_identity_is_unauthenticated() {
    let dir = tempfile::tempdir().unwrap();
    let session = session_in(&dir);

    let restored = session.restore().await.unwrap();

    assert_eq!(restored, None);
    assert_eq!(session.current_user(), None);
}

#[tokio::test]
async fn test_restore_hydrates_persisted_identity() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("identity.json"), "7").unwrap();
    let session = session_in(&dir);

    let restored = session.restore().await.unwrap();

    assert_eq!(restored, Some(user(7)));
    assert_eq!(session.current_user(), Some(user(7)));
}

#[tokio::test]
async fn test_restore_heals_corrupt_identity_without_fetching() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("identity.json"), "garbage").unwrap();
    let session = session_in(&dir);

    let restored = session.restore().await.unwrap();

    assert_eq!(restored, None);
    assert!(!dir.path().join("identity.json").exists());
}

#[tokio::test]
async fn test_establish_persists_and_hydrates() {
    let dir = tempfile::tempdir().unwrap();
    let session = session_in(&dir);

    let established = session.establish(7).await.unwrap();

    assert_eq!(established, Some(user(7)));
    assert_eq!(
        fs::read_to_string(dir.path().join("identity.json")).unwrap(),
        "7"
    );
}

#[tokio::test]
async fn test_logout_tears_everything_down() {
    let dir = tempfile::tempdir().unwrap();
    let session = session_in(&dir);

    session.establish(7).await.unwrap();
    session.logout().unwrap();

    assert_eq!(session.current_user(), None);
    assert!(!dir.path().join("identity.json").exists());
    assert!(matches!(
        session.name_editor(),
        Err(SessionError::NotAuthenticated { .. })
    ));
}

#[tokio::test]
async fn test_rejected_restore_fails_closed() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("identity.json"), "7").unwrap();

    let store = IdentityStore::new(dir.path().join("identity.json"));
    let remote = MockRemote::default();
    remote
        .fetch_user
        .lock()
        .unwrap()
        .push_back(Script::err(auth_error()));
    let session = Session::new(remote, store);

    let err = session.restore().await.unwrap_err();

    assert!(err.is_authorization());
    assert_eq!(session.current_user(), None);
    assert!(!dir.path().join("identity.json").exists());
}

#[tokio::test]
async fn test_controllers_require_hydrated_entity() {
    let dir = tempfile::tempdir().unwrap();
    let session = session_in(&dir);

    assert!(session.name_editor().is_err());
    assert!(session.relationships().is_err());

    session.establish(7).await.unwrap();

    assert!(session.name_editor().is_ok());
    assert!(session.relationships().is_ok());
}

#[tokio::test]
async fn test_refresh_replaces_cache_with_server_truth() {
    let dir = tempfile::tempdir().unwrap();

    let mut renamed = user(7);
    renamed.name = "Renamed Upstream".to_string();

    let store = IdentityStore::new(dir.path().join("identity.json"));
    let remote = MockRemote::default();
    remote
        .fetch_user
        .lock()
        .unwrap()
        .push_back(Script::ok(user(7)));
    remote
        .fetch_user
        .lock()
        .unwrap()
        .push_back(Script::ok(renamed.clone()));
    let session = Session::new(remote, store);

    session.establish(7).await.unwrap();
    let refreshed = session.refresh().await.unwrap();

    assert_eq!(refreshed, Some(renamed.clone()));
    assert_eq!(session.current_user(), Some(renamed));
}

#[tokio::test]
async fn test_refresh_without_session_is_a_no_op() {
    let dir = tempfile::tempdir().unwrap();
    let session = session_in(&dir);

    assert_eq!(session.refresh().await.unwrap(), None);
}

#[tokio::test]
async fn test_editors_share_one_cache() {
    let dir = tempfile::tempdir().unwrap();
    let session = session_in(&dir);
    session.establish(7).await.unwrap();

    let editor = session.theme_editor().unwrap();
    editor.begin_edit().unwrap();
    editor
        .update_draft(|draft| draft.theme = am_core::Theme::Light)
        .unwrap();
    editor.submit().await.unwrap();

    // The commit is visible through the session immediately
    assert_eq!(
        session.current_user().unwrap().theme,
        Some(am_core::Theme::Light)
    );
}
