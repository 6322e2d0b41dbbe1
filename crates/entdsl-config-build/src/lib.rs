//! Configuration for the entdsl front end.
//!
//! Loaded from an optional `entdsl.toml`. Every key has a default, so an empty
//! file is a complete configuration.

use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

/// Conventional config file name.
pub const CONFIG_FILE_NAME: &str = "entdsl.toml";

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

///
/// Config
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub annotations: AnnotationConfig,
    pub entity: EntityConfig,
    pub link: LinkConfig,
}

impl Config {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;

        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&source)
    }

    /// Load the file if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Resolver settings derived from this config.
    #[must_use]
    pub fn convert(&self) -> ConvertConfig {
        ConvertConfig {
            entity: self.entity.clone(),
            link: self.link.clone(),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.entity.table_type.trim().is_empty() {
            return Err(ConfigError::Invalid("entity.table_type is empty".to_string()));
        }
        if self.link.id_prefix.trim().is_empty() {
            return Err(ConfigError::Invalid("link.id_prefix is empty".to_string()));
        }
        if self.link.collection_type.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "link.collection_type is empty".to_string(),
            ));
        }

        Ok(())
    }
}

///
/// AnnotationConfig
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AnnotationConfig {
    /// Accept `{}` as a block with zero annotations instead of rejecting it.
    pub allow_empty_block: bool,
}

///
/// EntityConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct EntityConfig {
    pub table_type: String,
}

impl Default for EntityConfig {
    fn default() -> Self {
        Self {
            table_type: "TABLE".to_string(),
        }
    }
}

///
/// LinkConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LinkConfig {
    pub id_prefix: String,
    pub collection_type: String,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            id_prefix: "Link".to_string(),
            collection_type: "List".to_string(),
        }
    }
}

///
/// ConvertConfig
/// The subset of the config the model resolver reads.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ConvertConfig {
    pub entity: EntityConfig,
    pub link: LinkConfig,
}

///
/// TESTS
///
