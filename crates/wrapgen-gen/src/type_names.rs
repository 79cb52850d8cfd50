//! Names of the symbols emitted for one package.

use serde::Serialize;
use wrapgen_scan::{ScannedPackage, package_alias};

use crate::error::Result;
use crate::ident::ensure_binding_name;

/// Every exported symbol name of a package module, derived from the client
/// class name without its client suffix (`S3Client` -> `S3`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeNames {
    /// Prefix shared by all symbols (`S3`).
    pub client_name: String,
    /// Context tag class wrapping the SDK client (`S3Client`).
    pub client_tag: String,
    /// Operation type map (`S3Api`).
    pub api: String,
    /// Operation key to command constructor table (`S3CommandFactory`).
    pub command_factory: String,
    /// Declared error wrapper class (`S3Error`).
    pub error: String,
    /// Operation key to declared error union (`S3OperationErrors`).
    pub operation_errors: String,
    /// Discriminant list constant (`S3_EXCEPTIONS`).
    pub exception_list: String,
    /// Discriminant union type (`S3ExceptionName`).
    pub exception_name: String,
    /// Namespace alias in the combined entry module (`s3`).
    pub alias: String,
}

impl TypeNames {
    /// Build names from a client prefix and package name.
    pub fn new(client_name: impl Into<String>, package_name: &str) -> Result<Self> {
        let client_name = client_name.into();
        ensure_binding_name(&client_name)?;
        let alias = package_alias(package_name);
        ensure_binding_name(&alias)?;

        Ok(Self {
            client_tag: format!("{client_name}Client"),
            api: format!("{client_name}Api"),
            command_factory: format!("{client_name}CommandFactory"),
            error: format!("{client_name}Error"),
            operation_errors: format!("{client_name}OperationErrors"),
            exception_list: format!("{client_name}_EXCEPTIONS"),
            exception_name: format!("{client_name}ExceptionName"),
            client_name,
            alias,
        })
    }

    /// Names for a scanned package.
    pub fn for_package(package: &ScannedPackage) -> Result<Self> {
        let class_name = package.client_class_name();
        let client_name = class_name
            .strip_suffix(package.conventions.client_suffix.as_str())
            .unwrap_or(class_name);
        Self::new(client_name, &package.package_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenError;

    #[test]
    fn derives_every_symbol() {
        let names = TypeNames::new("S3", "s3").unwrap();
        assert_eq!(names.client_tag, "S3Client");
        assert_eq!(names.api, "S3Api");
        assert_eq!(names.command_factory, "S3CommandFactory");
        assert_eq!(names.error, "S3Error");
        assert_eq!(names.operation_errors, "S3OperationErrors");
        assert_eq!(names.exception_list, "S3_EXCEPTIONS");
        assert_eq!(names.exception_name, "S3ExceptionName");
        assert_eq!(names.alias, "s3");
    }

    #[test]
    fn alias_replaces_dashes() {
        let names = TypeNames::new("SSOOIDC", "sso-oidc").unwrap();
        assert_eq!(names.alias, "sso_oidc");
        assert_eq!(names.exception_list, "SSOOIDC_EXCEPTIONS");
    }

    #[test]
    fn rejects_reserved_alias() {
        let err = TypeNames::new("Delete", "delete").unwrap_err();
        assert!(matches!(err, GenError::InvalidIdentifier { .. }));
    }
}
