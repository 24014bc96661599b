//! Disk-backed install records.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use url::Url;
use vmcatalog_core::VmInstall;

/// A runtime installation rooted at a JDK/JRE home directory.
///
/// The id is fixed at creation; the remaining attributes can be adjusted by
/// the host after registration (installs are shared as `Arc`s, so mutation
/// goes through interior locks).
pub struct StandardVmInstall {
    id: String,
    name: RwLock<Option<String>>,
    install_location: RwLock<Option<PathBuf>>,
    vm_arguments: RwLock<Option<String>>,
    javadoc_location: RwLock<Option<Url>>,
    java_version: RwLock<Option<String>>,
    created_at: DateTime<Utc>,
}

impl StandardVmInstall {
    /// Create a bare record for `id` with every attribute unset.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: RwLock::new(None),
            install_location: RwLock::new(None),
            vm_arguments: RwLock::new(None),
            javadoc_location: RwLock::new(None),
            java_version: RwLock::new(None),
            created_at: Utc::now(),
        }
    }

    pub fn set_name(&self, name: Option<String>) {
        *self.name.write() = name;
    }

    pub fn set_install_location(&self, location: Option<PathBuf>) {
        *self.install_location.write() = location;
    }

    pub fn set_vm_arguments(&self, arguments: Option<String>) {
        *self.vm_arguments.write() = arguments;
    }

    pub fn set_javadoc_location(&self, location: Option<Url>) {
        *self.javadoc_location.write() = location;
    }

    pub fn set_java_version(&self, version: Option<String>) {
        *self.java_version.write() = version;
    }

    /// When this record was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl VmInstall for StandardVmInstall {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> Option<String> {
        self.name.read().clone()
    }

    fn install_location(&self) -> Option<PathBuf> {
        self.install_location.read().clone()
    }

    fn vm_arguments(&self) -> Option<String> {
        self.vm_arguments.read().clone()
    }

    fn javadoc_location(&self) -> Option<Url> {
        self.javadoc_location.read().clone()
    }

    fn java_version(&self) -> Option<String> {
        self.java_version.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_install_has_only_id() {
        let vm = StandardVmInstall::new("jdk-17");
        assert_eq!(vm.id(), "jdk-17");
        assert!(vm.name().is_none());
        assert!(vm.install_location().is_none());
        assert!(vm.vm_arguments().is_none());
        assert!(vm.javadoc_location().is_none());
        assert!(vm.java_version().is_none());
    }

    #[test]
    fn test_setters_are_visible_through_the_trait() {
        let vm = StandardVmInstall::new("jdk-17");
        vm.set_name(Some("Temurin 17".into()));
        vm.set_install_location(Some(PathBuf::from("/opt/jdk-17")));
        vm.set_vm_arguments(Some("-Xmx2g".into()));
        vm.set_java_version(Some("17.0.9".into()));

        let vm: &dyn VmInstall = &vm;
        assert_eq!(vm.name().as_deref(), Some("Temurin 17"));
        assert_eq!(
            vm.install_location().as_deref(),
            Some(std::path::Path::new("/opt/jdk-17"))
        );
        assert_eq!(vm.vm_arguments().as_deref(), Some("-Xmx2g"));
        assert_eq!(vm.java_version().as_deref(), Some("17.0.9"));
    }

    #[test]
    fn test_rename_and_clear() {
        let vm = StandardVmInstall::new("jdk-17");
        vm.set_name(Some("old".into()));
        vm.set_name(Some("new".into()));
        assert_eq!(vm.name().as_deref(), Some("new"));

        vm.set_name(None);
        assert!(vm.name().is_none());
    }

    #[test]
    fn test_descriptor_carries_attributes() {
        let vm = StandardVmInstall::new("jdk-21");
        vm.set_name(Some("JDK 21".into()));
        vm.set_javadoc_location(Some(
            Url::parse("https://docs.oracle.com/en/java/javase/21/docs/api/").unwrap(),
        ));

        let descriptor = vm.descriptor();
        assert_eq!(descriptor.id, "jdk-21");
        assert_eq!(descriptor.name.as_deref(), Some("JDK 21"));
        assert!(descriptor.javadoc_location.is_some());
    }
}
