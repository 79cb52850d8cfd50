use std::path::PathBuf;

/// Conventional config file name, looked up in the project root.
pub const CONFIG_FILE: &str = "aws-sdk.json";

/// Prefix of environment variables overriding config values.
pub const ENV_PREFIX: &str = "WRAPGEN_";

pub fn default_generate_to() -> PathBuf {
    PathBuf::from("src/generated")
}

pub fn default_package_prefix() -> String {
    "@aws-sdk/client-".to_string()
}

pub fn default_node_modules() -> PathBuf {
    PathBuf::from("node_modules")
}

pub fn default_concurrency() -> usize {
    3
}

pub fn default_client_suffix() -> String {
    "Client".to_string()
}

pub fn default_service_exception_suffix() -> String {
    "ServiceException".to_string()
}

pub fn default_config_suffix() -> String {
    "ClientConfig".to_string()
}

pub fn default_command_suffix() -> String {
    "Command".to_string()
}
