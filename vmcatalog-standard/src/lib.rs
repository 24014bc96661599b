//! # vmcatalog Standard
//!
//! The standard install type for the vmcatalog registry: JDK/JRE homes on
//! the local filesystem. Validates that an install location carries a java
//! launcher, probes the `release` file for the Java version, and can seed a
//! registry from a [`vmcatalog_core::CatalogConfig`].

pub mod install;
pub mod vm_type;

pub use install::StandardVmInstall;
pub use vm_type::{StandardVmType, java_executable, probe_release_version};
