use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

const DEFAULT_CONFIG_FILES: &[&str] = &[
    "larder.toml",
    "config/larder.toml",
    "crates/config/larder.toml",
    "../larder.toml",
    "../config/larder.toml",
    "../crates/config/larder.toml",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub lookup: LookupConfig,
    pub storage: StorageConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            lookup: LookupConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

/// Configuration options for the open food-product database client.
///
/// ```
/// use larder_config::LookupConfig;
///
/// let lookup = LookupConfig::default();
/// assert_eq!(lookup.base_url, "https://world.openfoodfacts.org");
/// assert_eq!(lookup.request_timeout_seconds, 30);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupConfig {
    #[serde(default = "LookupConfig::default_base_url")]
    pub base_url: String,
    #[serde(default = "LookupConfig::default_request_timeout")]
    pub request_timeout_seconds: u64,
    #[serde(default = "LookupConfig::default_user_agent")]
    pub user_agent: Option<String>,
}

impl LookupConfig {
    fn default_base_url() -> String {
        "https://world.openfoodfacts.org".to_string()
    }

    const fn default_request_timeout() -> u64 {
        30
    }

    fn default_user_agent() -> Option<String> {
        Some("Larder/0.1".to_string())
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            request_timeout_seconds: Self::default_request_timeout(),
            user_agent: Self::default_user_agent(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "StorageConfig::default_snapshot_path")]
    pub snapshot_path: String,
}

impl StorageConfig {
    fn default_snapshot_path() -> String {
        "larder/session.json".to_string()
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            snapshot_path: Self::default_snapshot_path(),
        }
    }
}

/// Load the application configuration by combining defaults, files, and environment overrides.
///
/// ```
/// use larder_config::load;
///
/// std::env::remove_var("LARDER_CONFIG");
///
/// let config = load().expect("configuration should load with defaults");
/// assert!(!config.lookup.base_url.is_empty());
/// ```
pub fn load() -> anyhow::Result<AppConfig> {
    let defaults = AppConfig::default();

    let timeout = defaults.lookup.request_timeout_seconds;
    let timeout_i64 = if timeout > i64::MAX as u64 {
        i64::MAX
    } else {
        timeout as i64
    };

    let mut builder = config::Config::builder();
    builder = builder
        .set_default("lookup.base_url", defaults.lookup.base_url.clone())
        .unwrap()
        .set_default("lookup.request_timeout_seconds", timeout_i64)
        .unwrap()
        .set_default(
            "storage.snapshot_path",
            defaults.storage.snapshot_path.clone(),
        )
        .unwrap();

    if let Some(user_agent) = defaults.lookup.user_agent.clone() {
        builder = builder.set_default("lookup.user_agent", user_agent).unwrap();
    }

    let environment_overrides = config::Environment::with_prefix("LARDER").separator("__");

    let mut config_file_attached = false;

    if let Ok(path) = std::env::var("LARDER_CONFIG") {
        builder = builder.add_source(config::File::from(PathBuf::from(&path)));
        config_file_attached = true;
        debug!(path, "loading configuration via LARDER_CONFIG");
    } else if let Ok(cwd) = std::env::current_dir() {
        let fallback = DEFAULT_CONFIG_FILES
            .iter()
            .map(|candidate| cwd.join(candidate))
            .find(|path| path.exists());

        if let Some(path) = fallback {
            debug!(path = %path.display(), "loading configuration file");
            builder = builder.add_source(config::File::from(path));
            config_file_attached = true;
        }
    }

    if !config_file_attached {
        debug!("no configuration file found, relying on defaults and environment overrides");
    }

    builder = builder.add_source(environment_overrides);

    let cfg = builder.build().context("unable to build configuration")?;

    let config = cfg
        .try_deserialize::<AppConfig>()
        .context("invalid configuration")?;

    debug!(?config, "loaded larder configuration");
    Ok(config)
}
