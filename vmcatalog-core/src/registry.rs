//! Per-type registry state: the ordered install collection and its lock.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tracing::{debug, warn};

use crate::error::{CatalogError, Result};
use crate::install::VmInstall;
use crate::model::InstallModel;

/// Ordered, duplicate-free collection of installs for one install type.
///
/// Every install type instance owns exactly one registry, and the collection
/// lock is scoped to that instance. Installs are appended in registration
/// order; removal takes out exactly one entry and preserves the relative
/// order of the rest.
pub struct InstallRegistry {
    type_id: RwLock<Option<String>>,
    installs: Mutex<Vec<Arc<dyn VmInstall>>>,
    model: Arc<dyn InstallModel>,
}

impl InstallRegistry {
    /// Create an empty registry reporting removals to `model`.
    pub fn new(model: Arc<dyn InstallModel>) -> Self {
        Self {
            type_id: RwLock::new(None),
            installs: Mutex::new(Vec::new()),
            model,
        }
    }

    /// Record the type id supplied by host configuration.
    ///
    /// Expected to be called once before concurrent use; repeated calls
    /// overwrite the previous value.
    pub fn set_initialization_data(&self, id: impl Into<String>) {
        let id = id.into();
        debug!(type_id = %id, "install type initialized");
        *self.type_id.write() = Some(id);
    }

    /// The type id, or `None` before initialization.
    pub fn id(&self) -> Option<String> {
        self.type_id.read().clone()
    }

    /// Point-in-time snapshot of the collection, in registration order.
    ///
    /// Later registry mutations never affect the returned sequence.
    pub fn installs(&self) -> Vec<Arc<dyn VmInstall>> {
        self.installs.lock().clone()
    }

    /// First install whose id matches, or `None`.
    pub fn find_install(&self, id: &str) -> Option<Arc<dyn VmInstall>> {
        self.installs
            .lock()
            .iter()
            .find(|vm| vm.id() == id)
            .cloned()
    }

    /// First install whose name matches, or `None`.
    ///
    /// Names are not required unique, so this returns the earliest match in
    /// registration order. `None` matches installs with no name.
    pub fn find_install_by_name(&self, name: Option<&str>) -> Option<Arc<dyn VmInstall>> {
        self.installs
            .lock()
            .iter()
            .find(|vm| vm.name().as_deref() == name)
            .cloned()
    }

    /// Register the install produced by `build` under `id`.
    ///
    /// The duplicate check, the factory call, and the append all run under
    /// one critical section, so two racing callers can never both register
    /// the same id. On the duplicate path nothing is mutated and `build` is
    /// never invoked.
    pub fn insert_with<F>(&self, id: &str, build: F) -> Result<Arc<dyn VmInstall>>
    where
        F: FnOnce() -> Arc<dyn VmInstall>,
    {
        let mut installs = self.installs.lock();
        if installs.iter().any(|vm| vm.id() == id) {
            warn!(install_id = %id, "rejected duplicate install id");
            return Err(CatalogError::DuplicateInstall { id: id.to_owned() });
        }
        let vm = build();
        debug_assert_eq!(vm.id(), id, "factory returned an install with a mismatched id");
        installs.push(Arc::clone(&vm));
        debug!(install_id = %id, count = installs.len(), "install registered");
        Ok(vm)
    }

    /// Remove the install with `id`, notifying the model once.
    ///
    /// Notification happens after the collection lock has been released, so
    /// a model that re-enters the registry cannot deadlock. The observable
    /// consequence: by the time the model runs, another thread may already
    /// have mutated the registry again. No-op when `id` is absent.
    pub fn remove(&self, id: &str) -> Option<Arc<dyn VmInstall>> {
        let removed = {
            let mut installs = self.installs.lock();
            installs
                .iter()
                .position(|vm| vm.id() == id)
                .map(|index| installs.remove(index))
        };
        if let Some(vm) = &removed {
            debug!(install_id = %id, "install disposed");
            self.model.install_removed(Arc::clone(vm));
        }
        removed
    }
}
