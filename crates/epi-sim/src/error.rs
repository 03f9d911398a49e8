use std::path::PathBuf;

use epi_core::EpiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path:   PathBuf,
        source: std::io::Error,
    },

    #[error("config is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value for `{field}`: {reason}")]
    Invalid {
        field:  &'static str,
        reason: String,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("grid is full after placing {placed} of {requested} agents")]
    GridFull {
        placed:    usize,
        requested: usize,
    },

    #[error(transparent)]
    Engine(#[from] EpiError),
}

pub type SimResult<T> = Result<T, SimError>;
