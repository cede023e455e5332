// Path: crates/types/src/config/mod.rs

//! Shared configuration structures for the mapping library.
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Names under which the mapping library and the `address` constructor are
/// installed into a host runtime.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MappingConfig {
    /// The module namespace holding `new`, `get`, `set`, `delete`, `has`,
    /// `key_type` and `val_type`.
    #[serde(default = "default_module_name")]
    pub module_name: String,
    /// The registered name of the mapping handle's type metatable.
    #[serde(default = "default_type_name")]
    pub type_name: String,
    /// The global name of the address constructor.
    #[serde(default = "default_address_constructor")]
    pub address_constructor: String,
    /// The value scripts observe when they read the protected metatable.
    #[serde(default = "default_metatable_label")]
    pub metatable_label: String,
}

fn default_module_name() -> String {
    "mapping".to_string()
}
fn default_type_name() -> String {
    "__tos_mapping".to_string()
}
fn default_address_constructor() -> String {
    "address".to_string()
}
fn default_metatable_label() -> String {
    "protected".to_string()
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            module_name: default_module_name(),
            type_name: default_type_name(),
            address_constructor: default_address_constructor(),
            metatable_label: default_metatable_label(),
        }
    }
}

impl MappingConfig {
    /// Parses a TOML document. Missing fields take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects names a script could never refer to.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let names = [
            ("module_name", &self.module_name),
            ("type_name", &self.type_name),
            ("address_constructor", &self.address_constructor),
        ];
        for (field, name) in names {
            if name.trim().is_empty() {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must not be empty".to_string(),
                });
            }
        }
        if self.module_name == self.address_constructor {
            return Err(ConfigError::Invalid {
                field: "address_constructor",
                reason: format!("collides with module name '{}'", self.module_name),
            });
        }
        Ok(())
    }
}
