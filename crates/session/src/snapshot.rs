//! Local persistence for the restorable part of the session.
//!
//! The snapshot holds user, token, and preferences only; collections are
//! refetched from the backend after restore. Loading feeds an ordinary
//! session-setting action into the store, so the reducer stays the single
//! write path.

use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing::debug;

use crate::state::{Session, SessionSnapshot};

/// Write the restorable portion of `session` to `path`, creating parent
/// directories as needed.
pub fn save(path: &Path, session: &Session) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create snapshot directory {}", parent.display())
            })?;
        }
    }

    let snapshot = SessionSnapshot::of(session);
    let body =
        serde_json::to_string_pretty(&snapshot).context("failed to serialize session snapshot")?;

    fs::write(path, body)
        .with_context(|| format!("failed to write session snapshot {}", path.display()))?;

    debug!(path = %path.display(), "session snapshot written");
    Ok(())
}

/// Load a previously saved snapshot; `Ok(None)` when none exists yet.
pub fn load(path: &Path) -> anyhow::Result<Option<SessionSnapshot>> {
    if !path.exists() {
        return Ok(None);
    }

    let body = fs::read_to_string(path)
        .with_context(|| format!("failed to read session snapshot {}", path.display()))?;

    let snapshot = serde_json::from_str(&body)
        .with_context(|| format!("invalid session snapshot {}", path.display()))?;

    debug!(path = %path.display(), "session snapshot loaded");
    Ok(Some(snapshot))
}
