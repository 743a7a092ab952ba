//! Error types for kisan-desk.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeskError {
    #[error("Unknown language code: {0} (expected \"en\" or \"hi\")")]
    UnknownLanguage(String),

    #[error("Could not determine a config directory for this user")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config encode error: {0}")]
    ConfigEncode(#[from] toml::ser::Error),
}
