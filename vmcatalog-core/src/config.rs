//! Configuration for seeding a VM catalog.
//!
//! Uses `figment` for layered configuration: defaults -> config file ->
//! environment. Hosts point [`CatalogConfig::load`] at a TOML file listing
//! the installs to register at startup; individual fields can be overridden
//! through `VMCATALOG_`-prefixed environment variables.

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Declarative description of one install to register at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallDefinition {
    /// Registry id, unique within the owning install type.
    pub id: String,
    /// Display name shown to users.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Root directory of the installation.
    pub install_location: PathBuf,
    /// Extra arguments passed to the VM at launch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vm_arguments: Option<String>,
}

/// Top-level configuration for a VM catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Installs to register at startup.
    #[serde(default)]
    pub installs: Vec<InstallDefinition>,
    /// Whether install locations are validated before registration.
    #[serde(default = "default_validate_locations")]
    pub validate_locations: bool,
}

fn default_validate_locations() -> bool {
    true
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            installs: Vec::new(),
            validate_locations: true,
        }
    }
}

impl CatalogConfig {
    /// Load configuration, layering defaults, an optional TOML file, and
    /// `VMCATALOG_`-prefixed environment variables (e.g.
    /// `VMCATALOG_VALIDATE_LOCATIONS=false`).
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(CatalogConfig::default()));

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        let config = figment.merge(Env::prefixed("VMCATALOG_")).extract()?;
        Ok(config)
    }
}
