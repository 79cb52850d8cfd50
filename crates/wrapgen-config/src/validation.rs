use crate::WrapgenConfig;
use crate::error::{ConfigError, Result};

impl WrapgenConfig {
    /// Validate configuration for logical consistency.
    pub fn validate(&self) -> Result<()> {
        if self.clients.is_empty() {
            return Err(ConfigError::MissingField {
                field: "clients".to_string(),
                hint: format!(
                    "list clients explicitly or add '{}<name>' packages to package.json",
                    self.package_prefix
                ),
            });
        }

        if let Some(client) = self.clients.iter().find(|c| c.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "clients".to_string(),
                value: format!("{client:?}"),
                hint: "client names cannot be empty".to_string(),
            });
        }

        if self.concurrency == 0 {
            return Err(ConfigError::InvalidValue {
                field: "concurrency".to_string(),
                value: "0".to_string(),
                hint: "at least one package must be processed at a time".to_string(),
            });
        }

        if self.generate_to.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "generate_to".to_string(),
                value: String::new(),
                hint: "output directory cannot be empty".to_string(),
            });
        }

        let conventions = &self.conventions;
        for (field, value) in [
            ("conventions.client_suffix", &conventions.client_suffix),
            (
                "conventions.service_exception_suffix",
                &conventions.service_exception_suffix,
            ),
            ("conventions.config_suffix", &conventions.config_suffix),
            ("conventions.command_suffix", &conventions.command_suffix),
        ] {
            if value.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    value: String::new(),
                    hint: "suffixes cannot be empty".to_string(),
                });
            }
        }

        Ok(())
    }
}
