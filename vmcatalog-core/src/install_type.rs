//! The install type contract: one family of runtime installations.

use std::path::Path;
use std::sync::Arc;

use url::Url;

use crate::error::Result;
use crate::install::VmInstall;
use crate::registry::InstallRegistry;

/// A family of runtime installations, such as one kind of JDK.
///
/// Concrete types implement the four required methods; the provided methods
/// are the registry behavior shared by every family and are not meant to be
/// overridden. The two `default_*` hooks may be overridden by types that
/// know host-specific defaults.
pub trait VmInstallType: Send + Sync {
    /// The registry backing this install type.
    fn registry(&self) -> &InstallRegistry;

    /// Human-readable name of the install family.
    fn name(&self) -> &str;

    /// Construct the install record for `id`.
    ///
    /// The returned record must report `id` from [`VmInstall::id`]. This is
    /// called by [`VmInstallType::create_install`] with the registry lock
    /// held, so implementations must not call back into the registry.
    fn build_install(&self, id: &str) -> Arc<dyn VmInstall>;

    /// Check whether `location` holds an installation this type can manage.
    fn validate_install_location(&self, location: &Path) -> Result<()>;

    /// Record the id supplied by host configuration.
    ///
    /// Invoked once by the host before concurrent use; later calls overwrite.
    fn set_initialization_data(&self, id: &str) {
        self.registry().set_initialization_data(id);
    }

    /// The type id assigned at initialization, or `None` before it.
    fn id(&self) -> Option<String> {
        self.registry().id()
    }

    /// Snapshot of all current installs, in registration order.
    fn installs(&self) -> Vec<Arc<dyn VmInstall>> {
        self.registry().installs()
    }

    /// The install registered under `id`, or `None`.
    fn find_install(&self, id: &str) -> Option<Arc<dyn VmInstall>> {
        self.registry().find_install(id)
    }

    /// The first install carrying `name`, or `None`. An absent `name`
    /// matches installs that were never named.
    fn find_install_by_name(&self, name: Option<&str>) -> Option<Arc<dyn VmInstall>> {
        self.registry().find_install_by_name(name)
    }

    /// Create and register a new install under `id`.
    ///
    /// Fails with [`crate::CatalogError::DuplicateInstall`] when `id` is
    /// already registered; the collection is untouched on that path.
    fn create_install(&self, id: &str) -> Result<Arc<dyn VmInstall>> {
        self.registry().insert_with(id, || self.build_install(id))
    }

    /// Remove the install registered under `id`, notifying the host model
    /// exactly once. No-op when no install matches.
    fn dispose_install(&self, id: &str) {
        self.registry().remove(id);
    }

    /// Default javadoc location for an install at `install_location`, when
    /// this type knows one.
    fn default_javadoc_location(&self, _install_location: &Path) -> Option<Url> {
        None
    }

    /// Default VM arguments for an install at `install_location`, when this
    /// type knows any.
    fn default_vm_arguments(&self, _install_location: &Path) -> Option<String> {
        None
    }
}
