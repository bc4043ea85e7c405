//! Runtime wiring for the Larder client core.
//!
//! Builds the session store, scan cache, and product lookup client from
//! configuration, restoring a persisted session when one exists. The UI
//! shell receives a [`ClientServices`] and passes borrows down to the
//! components that need them.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use larder_config::AppConfig;
use larder_lookup::ProductLookup;
use larder_scan::ScanCache;
use larder_session::{snapshot, Action, SessionStore};

pub mod telemetry {
    use anyhow::Result;
    use tracing::Level;
    use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

    pub fn init_tracing() -> Result<()> {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let subscriber = SubscriberBuilder::default()
            .with_max_level(Level::INFO)
            .with_env_filter(env_filter)
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .map_err(|error| anyhow::anyhow!("failed to set tracing subscriber: {error}"))
    }
}

/// The long-lived service bundle owned by the client shell
pub struct ClientServices {
    pub store: SessionStore,
    pub scans: ScanCache,
    pub lookup: ProductLookup,
    snapshot_path: PathBuf,
}

impl std::fmt::Debug for ClientServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientServices")
            .field("snapshot_path", &self.snapshot_path)
            .finish_non_exhaustive()
    }
}

impl ClientServices {
    /// Build all client services from configuration.
    ///
    /// A persisted session snapshot, when present, is fed into the store as
    /// an ordinary session-setting action so the reducer stays the single
    /// write path.
    pub fn initialise(config: &AppConfig) -> Result<Self> {
        let snapshot_path = PathBuf::from(&config.storage.snapshot_path);
        let mut store = SessionStore::new();

        match snapshot::load(&snapshot_path).context("failed to load session snapshot")? {
            Some(restored) => {
                store.dispatch(Action::SetSession(restored));
                info!(
                    authenticated = store.state().is_authenticated(),
                    "restored persisted session"
                );
            }
            None => {
                info!("no persisted session, starting anonymous");
            }
        }

        let lookup = ProductLookup::new(&config.lookup)
            .context("failed to build product lookup client")?;

        Ok(Self {
            store,
            scans: ScanCache::new(),
            lookup,
            snapshot_path,
        })
    }

    /// Persist the restorable part of the current session
    pub fn persist_session(&self) -> Result<()> {
        snapshot::save(&self.snapshot_path, self.store.state())
    }
}
