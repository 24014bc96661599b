//! The install record contract shared by every install type.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

/// One concrete runtime installation belonging to an install type.
///
/// Records are constructed only by the owning type's factory hook (see
/// [`crate::VmInstallType::build_install`]) and live in that type's registry
/// until disposed. Only the id is required; the remaining accessors default
/// to absent so minimal install kinds implement a single method.
pub trait VmInstall: Send + Sync {
    /// Identifier, unique within the owning install type.
    fn id(&self) -> &str;

    /// Display name. Not required to be unique, and may be unset.
    fn name(&self) -> Option<String> {
        None
    }

    /// Root directory of the installation on disk.
    fn install_location(&self) -> Option<PathBuf> {
        None
    }

    /// Arguments passed to the VM at launch, beyond what the launcher adds.
    fn vm_arguments(&self) -> Option<String> {
        None
    }

    /// Location of the API documentation for this installation.
    fn javadoc_location(&self) -> Option<Url> {
        None
    }

    /// Java language version reported by the installation.
    fn java_version(&self) -> Option<String> {
        None
    }

    /// Point-in-time snapshot of the record, for hosts that ship install
    /// data across a protocol boundary.
    fn descriptor(&self) -> InstallDescriptor {
        InstallDescriptor {
            id: self.id().to_owned(),
            name: self.name(),
            install_location: self.install_location(),
            vm_arguments: self.vm_arguments(),
            javadoc_location: self.javadoc_location(),
            java_version: self.java_version(),
        }
    }
}

impl fmt::Debug for dyn VmInstall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VmInstall").field("id", &self.id()).finish()
    }
}

/// Serializable snapshot of a [`VmInstall`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallDescriptor {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub install_location: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vm_arguments: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub javadoc_location: Option<Url>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub java_version: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BareInstall {
        id: String,
    }

    impl VmInstall for BareInstall {
        fn id(&self) -> &str {
            &self.id
        }
    }

    struct NamedInstall {
        id: String,
        name: String,
        location: PathBuf,
    }

    impl VmInstall for NamedInstall {
        fn id(&self) -> &str {
            &self.id
        }

        fn name(&self) -> Option<String> {
            Some(self.name.clone())
        }

        fn install_location(&self) -> Option<PathBuf> {
            Some(self.location.clone())
        }
    }

    #[test]
    fn test_optional_accessors_default_to_absent() {
        let vm = BareInstall { id: "v1".into() };
        assert_eq!(vm.id(), "v1");
        assert!(vm.name().is_none());
        assert!(vm.install_location().is_none());
        assert!(vm.vm_arguments().is_none());
        assert!(vm.javadoc_location().is_none());
        assert!(vm.java_version().is_none());
    }

    #[test]
    fn test_descriptor_reflects_accessors() {
        let vm = NamedInstall {
            id: "jdk-21".into(),
            name: "JDK 21".into(),
            location: PathBuf::from("/opt/jdk-21"),
        };
        let descriptor = vm.descriptor();
        assert_eq!(descriptor.id, "jdk-21");
        assert_eq!(descriptor.name.as_deref(), Some("JDK 21"));
        assert_eq!(
            descriptor.install_location.as_deref(),
            Some(std::path::Path::new("/opt/jdk-21"))
        );
        assert!(descriptor.vm_arguments.is_none());
    }

    #[test]
    fn test_descriptor_serialization_skips_absent_fields() {
        let vm = BareInstall { id: "v1".into() };
        let json = serde_json::to_string(&vm.descriptor()).unwrap();
        assert_eq!(json, r#"{"id":"v1"}"#);

        let restored: InstallDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, vm.descriptor());
    }
}
