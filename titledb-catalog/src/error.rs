use std::fmt;

/// Which of the two inputs a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogInput {
    /// Per-release title metadata.
    Titles,
    /// Per-title update version history.
    Versions,
}

impl fmt::Display for CatalogInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Titles => f.write_str("titles"),
            Self::Versions => f.write_str("versions"),
        }
    }
}

/// Errors that can occur while loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to decode {input} data: {source}")]
    Decode {
        input: CatalogInput,
        source: serde_json::Error,
    },
}

impl CatalogError {
    pub fn decode(input: CatalogInput, source: serde_json::Error) -> Self {
        Self::Decode { input, source }
    }

    /// The input that failed to decode, if this is a decode failure.
    pub fn decode_input(&self) -> Option<CatalogInput> {
        match self {
            Self::Decode { input, .. } => Some(*input),
            Self::Io { .. } => None,
        }
    }
}
