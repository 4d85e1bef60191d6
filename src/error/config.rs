use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config field '{field}' must not be empty")]
    EmptyField { field: &'static str },

    #[error("failed to parse {format} config: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },

    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unsupported config file extension: {path}")]
    UnsupportedFormat { path: PathBuf },
}

impl ConfigError {
    pub fn empty_field(field: &'static str) -> Self {
        Self::EmptyField { field }
    }

    pub fn parse(format: &'static str, message: impl Into<String>) -> Self {
        Self::Parse {
            format,
            message: message.into(),
        }
    }

    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}
