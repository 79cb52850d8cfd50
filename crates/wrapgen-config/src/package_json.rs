//! Client discovery from the project's package.json.

use std::fs;
use std::path::Path;

use indexmap::{IndexMap, IndexSet};
use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// The dependency tables of a package.json; everything else is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageJson {
    #[serde(default)]
    pub dependencies: IndexMap<String, String>,
    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: IndexMap<String, String>,
}

impl PackageJson {
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::PackageJson {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Names of client packages among the dependencies, with `prefix`
    /// stripped: `@aws-sdk/client-s3` becomes `s3`.
    ///
    /// `dependencies` come before `devDependencies`; each name appears once,
    /// in declaration order.
    pub fn client_packages(&self, prefix: &str) -> Vec<String> {
        self.dependencies
            .keys()
            .chain(self.dev_dependencies.keys())
            .filter_map(|name| name.strip_prefix(prefix))
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_prefixed_dependencies_in_order() {
        let package: PackageJson = serde_json::from_str(
            r#"{
                "name": "app",
                "dependencies": {
                    "effect": "^3.0.0",
                    "@aws-sdk/client-sqs": "^3.600.0",
                    "@aws-sdk/client-s3": "^3.600.0"
                },
                "devDependencies": {
                    "@aws-sdk/client-sqs": "^3.600.0",
                    "@aws-sdk/client-dynamodb": "^3.600.0",
                    "@aws-sdk/types": "^3.600.0"
                }
            }"#,
        )
        .unwrap();

        assert_eq!(
            package.client_packages("@aws-sdk/client-"),
            vec!["sqs", "s3", "dynamodb"]
        );
    }

    #[test]
    fn missing_tables_yield_no_clients() {
        let package: PackageJson = serde_json::from_str(r#"{ "name": "app" }"#).unwrap();
        assert!(package.client_packages("@aws-sdk/client-").is_empty());
    }
}
