use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use wrapgen_scan::Conventions;

use crate::defaults::*;

/// What a run does when some packages fail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Report failed packages and aggregate the successful ones.
    #[default]
    Skip,
    /// Fail the whole run; nothing is written.
    Abort,
}

/// Naming conventions of the scanned package family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ConventionsConfig {
    /// Suffix of the client class (e.g. "Client" in "S3Client")
    #[serde(default = "default_client_suffix", alias = "clientSuffix")]
    pub client_suffix: String,

    /// Suffix of the base exception class (e.g. "ServiceException")
    #[serde(
        default = "default_service_exception_suffix",
        alias = "serviceExceptionSuffix"
    )]
    pub service_exception_suffix: String,

    /// Suffix of the client configuration interface (e.g. "ClientConfig")
    #[serde(default = "default_config_suffix", alias = "configSuffix")]
    pub config_suffix: String,

    /// Suffix of command classes (e.g. "Command" in "GetObjectCommand")
    #[serde(default = "default_command_suffix", alias = "commandSuffix")]
    pub command_suffix: String,
}

impl Default for ConventionsConfig {
    fn default() -> Self {
        Self {
            client_suffix: default_client_suffix(),
            service_exception_suffix: default_service_exception_suffix(),
            config_suffix: default_config_suffix(),
            command_suffix: default_command_suffix(),
        }
    }
}

impl From<ConventionsConfig> for Conventions {
    fn from(config: ConventionsConfig) -> Self {
        Self {
            client_suffix: config.client_suffix,
            service_exception_suffix: config.service_exception_suffix,
            config_suffix: config.config_suffix,
            command_suffix: config.command_suffix,
        }
    }
}
