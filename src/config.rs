//! Server configuration.
//!
//! The configuration file is a flat mapping of keys to scalar values. YAML
//! and JSON documents both load, since the YAML parser accepts JSON.
//!
//! ```yaml
//! host: 0.0.0.0
//! port: 8080
//! base_dir: ./public
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use crate::log::Logger;

pub const HOST_KEY: &str = "host";
pub const PORT_KEY: &str = "port";
pub const BASE_DIR_KEY: &str = "base_dir";

#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read.
    Io(std::io::Error),
    /// The file is not a flat key/value document.
    Malformed(String),
    /// A required key is absent.
    MissingKey(String),
    /// A key is present but its value is unusable.
    InvalidValue { key: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {e}"),
            ConfigError::Malformed(msg) => write!(f, "malformed config file: {msg}"),
            ConfigError::MissingKey(key) => write!(f, "can't resolve key '{key}'"),
            ConfigError::InvalidValue { key, value } => {
                write!(f, "invalid value '{value}' for key '{key}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Nested(serde_yaml::Value),
}

impl Scalar {
    fn as_string(&self) -> Option<String> {
        match self {
            Scalar::Bool(b) => Some(b.to_string()),
            Scalar::Int(i) => Some(i.to_string()),
            Scalar::Float(x) => Some(x.to_string()),
            Scalar::Str(s) => Some(s.clone()),
            Scalar::Nested(_) => None,
        }
    }
}

/// A parsed configuration document exposing its values by key.
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    values: BTreeMap<String, Scalar>,
}

impl ConfigFile {
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }

        let values: BTreeMap<String, Scalar> =
            serde_yaml::from_str(text).map_err(|e| ConfigError::Malformed(e.to_string()))?;

        Ok(Self { values })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::parse(&text)
    }

    /// Looks up a scalar value, failing when the key is absent.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        let scalar = self
            .values
            .get(key)
            .ok_or_else(|| ConfigError::MissingKey(key.to_string()))?;

        scalar.as_string().ok_or_else(|| ConfigError::InvalidValue {
            key: key.to_string(),
            value: "<nested value>".to_string(),
        })
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

/// The three values the server needs to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub base_dir: String,
}

impl ServerConfig {
    pub fn from_file(file: &ConfigFile) -> Result<Self, ConfigError> {
        let host = file.get(HOST_KEY)?;
        let raw_port = file.get(PORT_KEY)?;
        let port = raw_port
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidValue {
                key: PORT_KEY.to_string(),
                value: raw_port.clone(),
            })?;
        let base_dir = file.get(BASE_DIR_KEY)?;

        Ok(Self {
            host,
            port,
            base_dir,
        })
    }

    /// Reads and resolves the configuration at `path`.
    pub fn load(path: impl AsRef<Path>, log: &Logger) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = ConfigFile::from_path(path)?;
        log.debug(format_args!(
            "loaded {} with keys [{}]",
            path.display(),
            file.keys().collect::<Vec<_>>().join(", ")
        ));
        Self::from_file(&file)
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
