use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Failed to access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("Unknown city: '{0}'")]
    UnknownCity(String),

    #[error("Total population overflows when adding '{0}'")]
    PopulationOverflow(String),

    #[error("Interner key space is exhausted")]
    KeySpaceExhausted,

    #[error("Unknown drink: '{0}'")]
    UnknownDrink(String),

    #[error("Unknown showcase: '{0}'")]
    UnknownShowcase(String),

    #[error("Operation '{operation}' is not supported by this device")]
    Unsupported { operation: &'static str },
}

impl PatternError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;
