//! Environment-driven settings shared by every command.
use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use feudal_content::{ContentFactory, embedded_catalog, embedded_catalog_with};
use feudal_core::{CapsPolicy, Catalog};

/// Where the catalog comes from and how strictly it is read.
#[derive(Clone, Debug, Default)]
pub struct XtaskConfig {
    /// Data directory. The embedded catalog is used when unset.
    pub data_dir: Option<PathBuf>,
    /// Force strict caps parsing regardless of `catalog.toml`.
    pub strict_caps: bool,
}

impl XtaskConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `FEUDAL_DATA_DIR` - Catalog data directory (default: embedded data)
    /// - `FEUDAL_STRICT_CAPS` - Reject malformed cap strings (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("FEUDAL_DATA_DIR") {
            if !dir.is_empty() {
                config.data_dir = Some(PathBuf::from(dir));
            }
        }
        if let Some(strict) = read_env_bool("FEUDAL_STRICT_CAPS") {
            config.strict_caps = strict;
        }

        config
    }

    /// Environment settings with a command-line data directory taking precedence.
    pub fn resolve(data_dir: Option<PathBuf>) -> Self {
        let mut config = Self::from_env();
        if data_dir.is_some() {
            config.data_dir = data_dir;
        }
        config
    }

    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.data_dir {
            Some(dir) => {
                let mut factory = ContentFactory::new(dir);
                if self.strict_caps {
                    let config = factory.load_config()?.with_caps_policy(CapsPolicy::Strict);
                    factory = factory.with_config(config);
                }
                factory
                    .load_catalog()
                    .with_context(|| format!("Failed to load catalog from {}", dir.display()))
            }
            None if self.strict_caps => {
                let config = feudal_content::ConfigLoader::parse(
                    feudal_content::loaders::embedded::CATALOG_TOML,
                )?
                .with_caps_policy(CapsPolicy::Strict);
                embedded_catalog_with(config).context("Failed to build embedded catalog")
            }
            None => embedded_catalog().context("Failed to build embedded catalog"),
        }
    }
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
