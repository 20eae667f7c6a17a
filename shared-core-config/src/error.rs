use std::num::ParseIntError;

use thiserror::Error;

use crate::duration::DurationError;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("configuration key '{key}' not found")]
    NotFound { key: String },

    #[error("failed to parse '{key}' as {}: {source}", .source.target())]
    Parse {
        key: String,
        #[source]
        source: ValueError,
    },

    #[error("missing required configuration keys: {}", .keys.join(", "))]
    MissingKeys { keys: Vec<String> },

    #[error("failed to load dotenv file: {0}")]
    Dotenv(#[from] dotenvy::Error),
}

impl ConfigError {
    /// Key the error refers to, when there is exactly one.
    pub fn key(&self) -> Option<&str> {
        match self {
            ConfigError::NotFound { key } | ConfigError::Parse { key, .. } => Some(key),
            ConfigError::MissingKeys { .. } | ConfigError::Dotenv(_) => None,
        }
    }
}

/// Why a present value could not be converted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    #[error(transparent)]
    Int(#[from] ParseIntError),

    #[error("invalid syntax {0:?}")]
    Bool(String),

    #[error(transparent)]
    Duration(#[from] DurationError),
}

impl ValueError {
    /// Name of the type the value was converted to.
    pub fn target(&self) -> &'static str {
        match self {
            ValueError::Int(_) => "int",
            ValueError::Bool(_) => "bool",
            ValueError::Duration(_) => "duration",
        }
    }
}
