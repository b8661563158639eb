//! Configuration loading helpers.

use std::env;
use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::contact_table::ContactTable;
use crate::error::TableError;

/// Bucket count used when nothing else is configured.
pub const DEFAULT_TABLE_SIZE: usize = 10;

const CONFIG_PATH_VAR: &str = "CONTACT_TABLE_CONFIG";
const OVERRIDE_PREFIX: &str = "CONTACT_TABLE__";

/// Errors returned by configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error while reading config files.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parse error.
    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),
    /// Invalid value for a key.
    #[error("invalid value for {key}: {value}")]
    InvalidValue {
        /// Configuration key.
        key: String,
        /// Raw value string.
        value: String,
    },
    /// Unknown configuration key.
    #[error("unknown config key: {0}")]
    UnknownKey(String),
    /// The configuration parsed but describes an unbuildable table.
    #[error(transparent)]
    Table(#[from] TableError),
}

/// Table configuration schema.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableConfig {
    /// Number of buckets; must be at least 1.
    pub size: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_TABLE_SIZE,
        }
    }
}

impl TableConfig {
    /// Parse configuration from TOML text. Missing fields take defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Load configuration from a TOML file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Load configuration from the `CONTACT_TABLE_CONFIG` env var (if set),
    /// then apply `CONTACT_TABLE__field` overrides.
    pub fn load_from_env() -> Result<Self, ConfigError> {
        let mut config = match env::var(CONFIG_PATH_VAR).ok() {
            Some(path) => Self::load_from_path(path)?,
            None => Self::default(),
        };
        config.apply_overrides(env::vars())?;
        Ok(config)
    }

    /// Apply `CONTACT_TABLE__field=value` overrides in-place. Variables
    /// without the prefix are ignored.
    pub fn apply_overrides<I>(&mut self, vars: I) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in vars {
            let Some(field) = key.strip_prefix(OVERRIDE_PREFIX) else {
                continue;
            };
            let value = value.trim();
            match field.to_ascii_lowercase().as_str() {
                "size" => self.size = parse_value(&key, value)?,
                _ => return Err(ConfigError::UnknownKey(key)),
            }
        }
        Ok(())
    }

    /// Build an empty table from this configuration.
    pub fn build(&self) -> Result<ContactTable, ConfigError> {
        debug!("building contact table from {:?}", self);
        Ok(ContactTable::new(self.size)?)
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        assert_eq!(TableConfig::default().size, DEFAULT_TABLE_SIZE);
        assert_eq!(TableConfig::from_toml_str("").unwrap(), TableConfig::default());
    }

    #[test]
    fn test_parse_toml() {
        let config = TableConfig::from_toml_str("size = 16\n").unwrap();
        assert_eq!(config.size, 16);
        assert_eq!(config.build().unwrap().size(), 16);
    }

    #[test]
    fn test_unknown_toml_field_rejected() {
        let err = TableConfig::from_toml_str("buckets = 4\n").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_load_from_path() {
        let path = env::temp_dir().join(format!("contact-table-{}.toml", std::process::id()));
        fs::write(&path, "size = 7\n").unwrap();
        let config = TableConfig::load_from_path(&path);
        fs::remove_file(&path).unwrap();
        assert_eq!(config.unwrap().size, 7);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let path = env::temp_dir().join("contact-table-does-not-exist.toml");
        let err = TableConfig::load_from_path(path).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_overrides() {
        let mut config = TableConfig::default();
        config
            .apply_overrides(vars(&[
                ("PATH", "/usr/bin"),
                ("CONTACT_TABLE_CONFIG", "/nowhere.toml"),
                ("CONTACT_TABLE__size", " 32 "),
            ]))
            .unwrap();
        assert_eq!(config.size, 32);
    }

    #[test]
    fn test_override_errors() {
        let mut config = TableConfig::default();
        let err = config
            .apply_overrides(vars(&[("CONTACT_TABLE__size", "many")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));

        let err = config
            .apply_overrides(vars(&[("CONTACT_TABLE__load_factor", "0.5")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownKey(k) if k == "CONTACT_TABLE__load_factor"));
        assert_eq!(config.size, DEFAULT_TABLE_SIZE);
    }

    #[test]
    fn test_zero_size_fails_to_build() {
        let config = TableConfig { size: 0 };
        let err = config.build().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Table(TableError::InvalidConfiguration(_))
        ));
    }
}
