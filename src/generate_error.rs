use crate::config::ClientTransport;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid ClientType : {0}")]
    InvalidClientType(String),
}

/// Errors that abort a generation pass.
/// The driver surfaces them verbatim and emits no artifact.
#[derive(Error, Debug, PartialEq)]
pub enum GenerateError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{file} depends on {dependency}, which is not part of the request")]
    MissingDependency { file: String, dependency: String },

    #[error("{0} is requested as a generation target but is not part of the request")]
    MissingFile(String),

    #[error("not implemented: {0} client generation")]
    UnsupportedTransport(ClientTransport),
}
