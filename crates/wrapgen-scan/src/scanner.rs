//! Locating the anchor declarations of a package.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::declarations::{ClassDecl, InterfaceDecl};
use crate::error::{Result, ScanError};
use crate::source::DeclarationSource;

/// Naming conventions shared by every package of the family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conventions {
    /// Suffix of the client class (`S3Client`).
    pub client_suffix: String,
    /// Suffix of the package's base exception class (`S3ServiceException`).
    pub service_exception_suffix: String,
    /// Suffix of the client configuration interface (`S3ClientConfig`).
    pub config_suffix: String,
    /// Suffix of command classes (`GetObjectCommand`).
    pub command_suffix: String,
}

impl Default for Conventions {
    fn default() -> Self {
        Self {
            client_suffix: "Client".to_string(),
            service_exception_suffix: "ServiceException".to_string(),
            config_suffix: "ClientConfig".to_string(),
            command_suffix: "Command".to_string(),
        }
    }
}

/// Every declaration of one package plus its resolved anchors.
///
/// Immutable once constructed.
#[derive(Debug, Clone)]
pub struct ScannedPackage {
    pub package_name: String,
    pub client_class: ClassDecl,
    pub exception_base_class: ClassDecl,
    pub config_interface: InterfaceDecl,
    pub classes: Vec<ClassDecl>,
    pub interfaces: Vec<InterfaceDecl>,
    pub conventions: Conventions,
}

impl ScannedPackage {
    /// Resolve the anchors among already-collected declarations.
    pub fn from_declarations(
        package_name: impl Into<String>,
        classes: Vec<ClassDecl>,
        interfaces: Vec<InterfaceDecl>,
        conventions: Conventions,
    ) -> Result<Self> {
        let package_name = package_name.into();

        let client_class = first_class(&classes, &conventions.client_suffix, &package_name)
            .ok_or_else(|| ScanError::ClientClassNotFound {
                package: package_name.clone(),
                suffix: conventions.client_suffix.clone(),
            })?;

        let exception_base_class =
            first_class(&classes, &conventions.service_exception_suffix, &package_name)
                .ok_or_else(|| ScanError::ExceptionClassNotFound {
                    package: package_name.clone(),
                    suffix: conventions.service_exception_suffix.clone(),
                })?;

        let config_interface =
            first_interface(&interfaces, &conventions.config_suffix, &package_name).ok_or_else(
                || ScanError::ConfigInterfaceNotFound {
                    package: package_name.clone(),
                    suffix: conventions.config_suffix.clone(),
                },
            )?;

        Ok(Self {
            package_name,
            client_class,
            exception_base_class,
            config_interface,
            classes,
            interfaces,
            conventions,
        })
    }

    /// Client class name (always present after a successful scan).
    pub fn client_class_name(&self) -> &str {
        self.client_class.name().unwrap_or_default()
    }

    pub fn exception_base_class_name(&self) -> &str {
        self.exception_base_class.name().unwrap_or_default()
    }

    pub fn config_interface_name(&self) -> &str {
        &self.config_interface.name
    }
}

/// Scans packages from a [`DeclarationSource`].
#[derive(Clone)]
pub struct Scanner {
    source: Arc<dyn DeclarationSource>,
    conventions: Conventions,
}

impl Scanner {
    pub fn new(source: Arc<dyn DeclarationSource>, conventions: Conventions) -> Self {
        Self {
            source,
            conventions,
        }
    }

    pub fn conventions(&self) -> &Conventions {
        &self.conventions
    }

    /// Load every declaration of `package_name` and resolve its anchors.
    pub fn scan(&self, package_name: &str) -> Result<ScannedPackage> {
        let files = self.source.load(package_name)?;

        let mut classes = Vec::new();
        let mut interfaces = Vec::new();
        for file in files {
            classes.extend(file.classes);
            interfaces.extend(file.interfaces);
        }

        debug!(
            package = package_name,
            classes = classes.len(),
            interfaces = interfaces.len(),
            "collected declarations"
        );

        ScannedPackage::from_declarations(
            package_name,
            classes,
            interfaces,
            self.conventions.clone(),
        )
    }
}

impl std::fmt::Debug for Scanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scanner")
            .field("conventions", &self.conventions)
            .finish_non_exhaustive()
    }
}

// First match wins. Ambiguity is reported but not resolved.
fn first_class(classes: &[ClassDecl], suffix: &str, package: &str) -> Option<ClassDecl> {
    let mut matches = classes.iter().filter(|class| class.name_ends_with(suffix));
    let first = matches.next()?;
    let others: Vec<&str> = matches.filter_map(ClassDecl::name).collect();
    if !others.is_empty() {
        warn!(
            package,
            chosen = first.name().unwrap_or_default(),
            ignored = ?others,
            "multiple classes end with '{suffix}', using the first"
        );
    }
    Some(first.clone())
}

fn first_interface(
    interfaces: &[InterfaceDecl],
    suffix: &str,
    package: &str,
) -> Option<InterfaceDecl> {
    let mut matches = interfaces
        .iter()
        .filter(|interface| interface.name.ends_with(suffix));
    let first = matches.next()?;
    let others: Vec<&str> = matches.map(|interface| interface.name.as_str()).collect();
    if !others.is_empty() {
        warn!(
            package,
            chosen = first.name.as_str(),
            ignored = ?others,
            "multiple interfaces end with '{suffix}', using the first"
        );
    }
    Some(first.clone())
}
