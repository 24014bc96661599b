//! Change-notification seam between a registry and its host.

use std::sync::Arc;

use crate::install::VmInstall;

/// Receives install lifecycle notifications from a registry.
///
/// Injected at [`crate::InstallRegistry`] construction so hosts can mirror
/// registry contents into a shared model. `install_removed` fires at most
/// once per successful disposal, after the registry has already updated its
/// own state and released its lock; implementations are free to call back
/// into the registry.
pub trait InstallModel: Send + Sync {
    /// An install was removed from its registry.
    fn install_removed(&self, install: Arc<dyn VmInstall>);
}

/// Sink for hosts that do not track removals.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullInstallModel;

impl InstallModel for NullInstallModel {
    fn install_removed(&self, _install: Arc<dyn VmInstall>) {}
}
