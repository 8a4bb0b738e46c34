use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Loading or decoding the title database failed
    #[error("{0}")]
    Catalog(#[from] titledb_catalog::CatalogError),

    /// A title ID given on the command line could not be decoded
    #[error("Invalid title ID: {0}")]
    InvalidId(#[from] titledb_core::IdError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Nothing in the catalog matched
    #[error("Not found: {0}")]
    NotFound(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}
