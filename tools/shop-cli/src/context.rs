//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use shop_auth::{SessionStore, UserSession};
use shop_cache::{FileStore, Store};
use shop_commerce::catalog::StaticCatalog;
use tracing::debug;

use crate::config::CliConfig;
use crate::output::Output;

/// Config file names searched from the working directory upwards.
pub const CONFIG_NAMES: [&str; 3] = ["shop.toml", ".shop.toml", "shop.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = match config_path {
            Some(path) => CliConfig::load(path)?,
            // Try to find config in current directory or parent directories
            None => match Self::find_config(&cwd) {
                Some(path) => CliConfig::load(&path.to_string_lossy())?,
                None => CliConfig::default(),
            },
        };

        Ok(Self { config, output, cwd })
    }

    /// Find the nearest config file in the directory tree.
    fn find_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    debug!(path = %config_path.display(), "Found config");
                    return Some(config_path);
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }

    /// The configured catalog, or the bundled one.
    pub fn catalog(&self) -> Result<StaticCatalog> {
        match &self.config.catalog.path {
            Some(path) => {
                let path = self.resolve_path(path);
                let json = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
                StaticCatalog::from_json(&json)
                    .with_context(|| format!("Failed to load catalog: {}", path.display()))
            }
            None => StaticCatalog::seed().context("Failed to load bundled catalog"),
        }
    }

    /// Open the session store file.
    pub fn store(&self) -> Result<FileStore> {
        let path = self.resolve_path(&self.config.storage.path);
        FileStore::open(&path)
            .with_context(|| format!("Failed to open session store: {}", path.display()))
    }

    /// Session manager over `store`.
    pub fn sessions<S: Store>(&self, store: S) -> SessionStore<S> {
        SessionStore::new(store, self.config.shop.storage_namespace.as_str())
    }

    /// The signed-in user, if any.
    pub fn current_user<S: Store>(&self, store: S) -> Result<Option<UserSession>> {
        self.sessions(store)
            .current()
            .context("Failed to read session")
    }
}
