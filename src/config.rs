use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::consts::{
    DEFAULT_BASE_BRANCH, DEFAULT_RECIPES_FILE, DEFAULT_SETUP_ENDPOINT, DEFAULT_SETUP_KEY,
    DEFAULT_SETUP_LIFESPAN_SECS, RECIPES_FILE_ENV,
};

/// Startup configuration. Every service-facing literal lives here so a key
/// or endpoint rotation is a config edit, not a rebuild.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Config {
    /// Shared secret for the setup lookup digest
    #[serde(default = "default_setup_key")]
    pub(crate) setup_key: String,
    /// Base URL of the setup-name service
    #[serde(default = "default_setup_endpoint")]
    pub(crate) setup_endpoint: String,
    /// Lifespan advertised for provisioned setups. Not applied to the label
    /// cache: cached entries are never re-validated.
    #[serde(default = "default_setup_lifespan")]
    pub(crate) setup_lifespan_secs: u64,
    /// Branch that `check` diffs commit messages against
    #[serde(default = "default_base_branch")]
    pub(crate) base_branch: String,
    /// Recipes file for `check`; `ROXCI_CONFIG_FILE` wins over this
    #[serde(default)]
    pub(crate) recipes_file: Option<String>,
    #[serde(default)]
    pub(crate) debug: bool,
}

fn default_setup_key() -> String {
    DEFAULT_SETUP_KEY.to_string()
}

fn default_setup_endpoint() -> String {
    DEFAULT_SETUP_ENDPOINT.to_string()
}

fn default_setup_lifespan() -> u64 {
    DEFAULT_SETUP_LIFESPAN_SECS
}

fn default_base_branch() -> String {
    DEFAULT_BASE_BRANCH.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            setup_key: default_setup_key(),
            setup_endpoint: default_setup_endpoint(),
            setup_lifespan_secs: default_setup_lifespan(),
            base_branch: default_base_branch(),
            recipes_file: None,
            debug: false,
        }
    }
}

impl Config {
    pub(crate) fn load() -> Self {
        Self::load_internal(false)
    }

    /// Quiet load for commands whose stdout is consumed by other tooling
    pub(crate) fn load_quiet() -> Self {
        Self::load_internal(true)
    }

    fn load_internal(quiet: bool) -> Self {
        let config_paths = Self::get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match toml::from_str::<Config>(&content) {
                    Ok(config) => {
                        if !quiet {
                            eprintln!("Loaded config from {}", path.display());
                        }
                        return config;
                    }
                    Err(e) => {
                        if !quiet {
                            eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                        }
                    }
                }
            }
        }

        Self::default()
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/roxctx/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("roxctx").join("config.toml"));
        }

        // 2. Platform config dir (macOS Application Support)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("roxctx").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.roxctx.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".roxctx.toml"));
        }

        paths
    }

    /// Recipes file for `check`: env var, then config, then repo default
    pub(crate) fn recipes_file(&self) -> PathBuf {
        if let Ok(path) = std::env::var(RECIPES_FILE_ENV) {
            return PathBuf::from(path);
        }
        match &self.recipes_file {
            Some(path) => PathBuf::from(path),
            None => PathBuf::from(DEFAULT_RECIPES_FILE),
        }
    }
}
