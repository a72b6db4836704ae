use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to format markup: {0}")]
    Fmt(#[from] std::fmt::Error),

    #[error("Failed to write markup: {0}")]
    Io(#[from] std::io::Error),
}

pub type RenderResult<T> = Result<T, RenderError>;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file format in {path}: {message}")]
    Parse {
        path: PathBuf,
        message: String,
    },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("Unknown void element style: {0} (expected 'html' or 'xhtml')")]
    InvalidVoidStyle(String),
}

pub type SettingsResult<T> = Result<T, SettingsError>;
