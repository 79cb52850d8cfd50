//! Configuration for wrapgen with multi-source loading.
//!
//! Merges the conventional `aws-sdk.json` file, `WRAPGEN_*` environment
//! variables and command-line overrides on top of the defaults.
//! Priority: CLI > Environment > File > Defaults

mod defaults;
mod error;
mod loading;
mod package_json;
mod types;
mod validation;

use std::path::PathBuf;

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use wrapgen_scan::Conventions;

pub use defaults::*;
pub use error::{ConfigError, Result};
pub use loading::{ConfigDiscovery, ConfigOverrides};
pub use package_json::PackageJson;
pub use types::{ConventionsConfig, FailurePolicy};

/// Generator configuration, loaded from `aws-sdk.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct WrapgenConfig {
    /// JSON schema reference, ignored by the generator
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Output directory of the generated modules
    #[serde(default = "default_generate_to", alias = "generateTo")]
    pub generate_to: PathBuf,

    /// Client packages to generate, without the package prefix (e.g. ["s3", "sqs"]).
    /// When empty, clients are discovered from package.json.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub clients: Vec<String>,

    /// Defaults applied to every client configuration (e.g. {"region": "us-east-1"})
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub global: IndexMap<String, serde_json::Value>,

    /// Prefix turning a client name into its npm package name
    #[serde(default = "default_package_prefix", alias = "packagePrefix")]
    pub package_prefix: String,

    /// Directory the client packages are installed in
    #[serde(default = "default_node_modules", alias = "nodeModules")]
    pub node_modules: PathBuf,

    /// Number of packages processed at the same time
    #[schemars(range(min = 1))]
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// What to do when some packages fail ("skip" or "abort")
    #[serde(default, alias = "onFailure")]
    pub on_failure: FailurePolicy,

    /// Naming conventions of the client packages
    #[serde(default)]
    pub conventions: ConventionsConfig,
}

impl Default for WrapgenConfig {
    fn default() -> Self {
        Self {
            schema: None,
            generate_to: default_generate_to(),
            clients: Vec::new(),
            global: IndexMap::new(),
            package_prefix: default_package_prefix(),
            node_modules: default_node_modules(),
            concurrency: default_concurrency(),
            on_failure: FailurePolicy::default(),
            conventions: ConventionsConfig::default(),
        }
    }
}

impl WrapgenConfig {
    /// Generate JSON Schema for aws-sdk.json.
    pub fn json_schema() -> serde_json::Value {
        schemars::schema_for!(WrapgenConfig).to_value()
    }

    /// Scanner conventions described by this configuration.
    pub fn scan_conventions(&self) -> Conventions {
        self.conventions.clone().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_conventional_layout() {
        let config = WrapgenConfig::default();
        assert_eq!(config.generate_to, PathBuf::from("src/generated"));
        assert_eq!(config.package_prefix, "@aws-sdk/client-");
        assert_eq!(config.concurrency, 3);
        assert_eq!(config.on_failure, FailurePolicy::Skip);
        assert_eq!(config.scan_conventions(), Conventions::default());
    }

    #[test]
    fn deserializes_original_file_shape() {
        let config: WrapgenConfig = serde_json::from_str(
            r#"{
                "$schema": "./node_modules/wrapgen/schema.json",
                "generate_to": "src/aws",
                "clients": ["s3", "sqs"],
                "global": { "region": "eu-west-1" }
            }"#,
        )
        .unwrap();
        assert_eq!(config.generate_to, PathBuf::from("src/aws"));
        assert_eq!(config.clients, vec!["s3", "sqs"]);
        assert_eq!(config.global["region"], serde_json::json!("eu-west-1"));
        assert_eq!(config.concurrency, 3);
    }

    #[test]
    fn rejects_unknown_fields() {
        let result: std::result::Result<WrapgenConfig, _> =
            serde_json::from_str(r#"{ "clients": ["s3"], "generateInto": "x" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn failure_policy_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&FailurePolicy::Abort).unwrap(),
            "\"abort\""
        );
    }

    #[test]
    fn validation() {
        let valid = WrapgenConfig {
            clients: vec!["s3".into()],
            ..WrapgenConfig::default()
        };
        assert!(valid.validate().is_ok());

        assert!(WrapgenConfig::default().validate().is_err());

        assert!(WrapgenConfig {
            concurrency: 0,
            ..valid.clone()
        }
        .validate()
        .is_err());

        assert!(WrapgenConfig {
            clients: vec!["".into()],
            ..valid.clone()
        }
        .validate()
        .is_err());

        let mut conventions = ConventionsConfig::default();
        conventions.command_suffix.clear();
        assert!(WrapgenConfig {
            conventions,
            ..valid
        }
        .validate()
        .is_err());
    }

    #[test]
    fn schema_lists_config_fields() {
        let schema = WrapgenConfig::json_schema();
        let properties = schema["properties"].as_object().unwrap();
        for field in ["generate_to", "clients", "global", "concurrency", "on_failure"] {
            assert!(properties.contains_key(field), "missing {field}");
        }
    }
}
