//! The standard install type: JDK/JRE homes on the local disk.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::warn;
use vmcatalog_core::{
    CatalogConfig, CatalogError, InstallDefinition, InstallModel, InstallRegistry, Result,
    VmInstall, VmInstallType,
};

use crate::install::StandardVmInstall;

/// Install type for standard JDK/JRE installations on the local filesystem.
///
/// An install location is accepted when it is a directory containing a java
/// launcher under `bin/`. Install records are [`StandardVmInstall`]s.
pub struct StandardVmType {
    registry: InstallRegistry,
}

impl StandardVmType {
    /// Create the type, reporting removals to `model`.
    pub fn new(model: Arc<dyn InstallModel>) -> Self {
        Self {
            registry: InstallRegistry::new(model),
        }
    }

    /// Register one install described by a configuration definition.
    ///
    /// Attributes from the definition are applied inside the factory call,
    /// so the whole registration runs under the registry's critical section.
    pub fn create_from_definition(
        &self,
        definition: &InstallDefinition,
    ) -> Result<Arc<dyn VmInstall>> {
        self.registry.insert_with(&definition.id, || {
            let vm = StandardVmInstall::new(&definition.id);
            vm.set_name(definition.name.clone());
            vm.set_install_location(Some(definition.install_location.clone()));
            vm.set_vm_arguments(definition.vm_arguments.clone());
            vm.set_java_version(probe_release_version(&definition.install_location));
            Arc::new(vm)
        })
    }

    /// Register every install listed in `config`.
    ///
    /// When `config.validate_locations` is set, definitions whose locations
    /// this type rejects are skipped with a warning instead of failing the
    /// whole seed. A duplicate definition id still fails.
    pub fn seed_from_config(&self, config: &CatalogConfig) -> Result<Vec<Arc<dyn VmInstall>>> {
        let mut seeded = Vec::with_capacity(config.installs.len());
        for definition in &config.installs {
            if config.validate_locations {
                if let Err(error) = self.validate_install_location(&definition.install_location) {
                    warn!(install_id = %definition.id, %error, "skipping install with invalid location");
                    continue;
                }
            }
            seeded.push(self.create_from_definition(definition)?);
        }
        Ok(seeded)
    }
}

impl VmInstallType for StandardVmType {
    fn registry(&self) -> &InstallRegistry {
        &self.registry
    }

    fn name(&self) -> &str {
        "Standard VM"
    }

    fn build_install(&self, id: &str) -> Arc<dyn VmInstall> {
        Arc::new(StandardVmInstall::new(id))
    }

    fn validate_install_location(&self, location: &Path) -> Result<()> {
        if !location.is_dir() {
            return Err(CatalogError::InvalidInstallLocation {
                path: location.to_path_buf(),
                reason: "not a directory".into(),
            });
        }
        if java_executable(location).is_none() {
            return Err(CatalogError::InvalidInstallLocation {
                path: location.to_path_buf(),
                reason: "no java launcher under bin".into(),
            });
        }
        Ok(())
    }
}

/// Locate the java launcher under an install home, if present.
pub fn java_executable(home: &Path) -> Option<PathBuf> {
    ["java", "java.exe"]
        .iter()
        .map(|name| home.join("bin").join(name))
        .find(|candidate| candidate.is_file())
}

/// Read `JAVA_VERSION` from the `release` file of an install home.
///
/// Standard JDK distributions ship a `release` file with lines like
/// `JAVA_VERSION="17.0.9"`. Absence of the file or the key is an absence
/// value, never an error.
pub fn probe_release_version(home: &Path) -> Option<String> {
    let contents = fs::read_to_string(home.join("release")).ok()?;
    contents.lines().find_map(|line| {
        let value = line.strip_prefix("JAVA_VERSION=")?;
        let version = value.trim().trim_matches('"');
        (!version.is_empty()).then(|| version.to_owned())
    })
}
