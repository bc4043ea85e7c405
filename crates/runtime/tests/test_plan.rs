//! Integration tests for client runtime wiring: snapshot restore on start,
//! persistence on demand, and cold starts without prior state.

use std::path::Path;

use anyhow::Result;
use tempfile::TempDir;

use larder_config::AppConfig;
use larder_runtime::ClientServices;
use larder_session::entities::{Preferences, Theme, User};
use larder_session::{snapshot, Action, Session, SessionSnapshot};

fn build_config(snapshot_path: &Path) -> AppConfig {
    let mut config = AppConfig::default();
    config.storage.snapshot_path = snapshot_path.to_string_lossy().into_owned();
    config
}

#[test]
fn initialise_starts_anonymous_without_snapshot() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = build_config(&temp_dir.path().join("absent/session.json"));

    let services = ClientServices::initialise(&config)?;

    assert!(!services.store.state().is_authenticated());
    assert!(services.scans.is_empty());
    Ok(())
}

#[test]
fn initialise_restores_persisted_session() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("larder/session.json");

    let mut session = Session::default();
    session.user = Some(User::new(
        "user-1".to_string(),
        Some("test@example.com".to_string()),
        None,
    ));
    session.token = Some("tok-1".to_string());
    session.preferences = Preferences {
        theme: Theme::Dark,
        ..Preferences::default()
    };
    snapshot::save(&path, &session)?;

    let services = ClientServices::initialise(&build_config(&path))?;

    let state = services.store.state();
    assert!(state.is_authenticated());
    assert_eq!(state.preferences.theme, Theme::Dark);
    assert_eq!(
        state.user.as_ref().map(|u| u.id.as_str()),
        Some("user-1")
    );
    Ok(())
}

#[test]
fn persist_session_round_trips_through_initialise() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("session.json");

    let mut services = ClientServices::initialise(&build_config(&path))?;
    services.store.dispatch(Action::SetSession(SessionSnapshot {
        user: Some(User::new("user-2".to_string(), None, None)),
        token: Some("tok-2".to_string()),
        preferences: None,
    }));
    services.persist_session()?;

    let revived = ClientServices::initialise(&build_config(&path))?;
    assert_eq!(revived.store.state().token.as_deref(), Some("tok-2"));
    Ok(())
}

#[test]
fn initialise_fails_on_corrupt_snapshot() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("session.json");
    std::fs::write(&path, "{ not json")?;

    let error = ClientServices::initialise(&build_config(&path))
        .expect_err("corrupt snapshot should fail initialisation");
    assert!(error.to_string().contains("session snapshot"));
    Ok(())
}
