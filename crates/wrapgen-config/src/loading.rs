use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized},
};
use indexmap::IndexSet;
use serde::Serialize;
use tracing::{debug, info};

use crate::WrapgenConfig;
use crate::defaults::{CONFIG_FILE, ENV_PREFIX};
use crate::error::{ConfigError, Result};
use crate::package_json::PackageJson;
use crate::types::FailurePolicy;

/// Values supplied on the command line; `None` and empty lists leave lower
/// layers untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generate_to: Option<PathBuf>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub clients: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_modules: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concurrency: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_failure: Option<FailurePolicy>,
}

/// File-based configuration discovery
///
/// Looks for `aws-sdk.json` in the project root.
#[derive(Debug, Clone)]
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find the config file in the root directory
    pub fn find(&self) -> Option<PathBuf> {
        let path = self.root.join(CONFIG_FILE);
        path.is_file().then_some(path)
    }

    /// Path of the project's package.json, if present
    pub fn package_json(&self) -> Option<PathBuf> {
        let path = self.root.join("package.json");
        path.is_file().then_some(path)
    }
}

// Top-level keys that may be set from the environment.
const ENV_KEYS: &[&str] = &[
    "generate_to",
    "clients",
    "global",
    "package_prefix",
    "node_modules",
    "concurrency",
    "on_failure",
    "conventions",
];

impl WrapgenConfig {
    /// Load configuration for the project at `root`.
    ///
    /// Priority: CLI overrides > `WRAPGEN_*` environment > config file >
    /// defaults. An explicit `config_path` must exist; otherwise
    /// `aws-sdk.json` is used when present. When no layer names any client,
    /// clients are discovered from `package.json`. The result is validated.
    pub fn load(
        root: &Path,
        config_path: Option<&Path>,
        overrides: &ConfigOverrides,
    ) -> Result<Self> {
        let discovery = ConfigDiscovery::new(root);
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        let config_file = match config_path {
            Some(path) => {
                let path = root.join(path);
                if !path.is_file() {
                    return Err(ConfigError::NotFound(path));
                }
                Some(path)
            }
            None => discovery.find(),
        };

        if let Some(path) = &config_file {
            debug!(path = %path.display(), "loading config file");
            figment = figment.merge(Json::file(path));
        }

        // WRAPGEN_CONCURRENCY, WRAPGEN_GLOBAL__REGION, ...
        figment = figment.merge(
            Env::prefixed(ENV_PREFIX)
                .filter(|key| {
                    let top = key.as_str().split("__").next().unwrap_or_default();
                    ENV_KEYS.iter().any(|known| top.eq_ignore_ascii_case(known))
                })
                .split("__"),
        );

        figment = figment.merge(Serialized::defaults(overrides));

        let mut config: Self = figment.extract()?;

        if config.clients.is_empty() {
            if let Some(path) = discovery.package_json() {
                config.clients =
                    PackageJson::from_path(&path)?.client_packages(&config.package_prefix);
                info!(
                    clients = config.clients.len(),
                    "discovered clients from package.json"
                );
            }
        }

        config.clients = dedupe(std::mem::take(&mut config.clients));
        config.validate()?;
        Ok(config)
    }

    /// Output directory resolved against `root`.
    pub fn output_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.generate_to)
    }

    /// `node_modules` directory resolved against `root`.
    pub fn node_modules_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.node_modules)
    }
}

fn dedupe(clients: Vec<String>) -> Vec<String> {
    clients
        .into_iter()
        .map(|client| client.trim().to_string())
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect()
}
