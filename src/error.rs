use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the fallible surfaces of the crate.
///
/// The caches and the undo history themselves never fail: a miss creates,
/// an empty pop is `None`.
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("invalid value for '{field}': {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("checkpoint {index} does not exist (only {len} saved)")]
    CheckpointOutOfRange { index: usize, len: usize },
}

impl PatternError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;
