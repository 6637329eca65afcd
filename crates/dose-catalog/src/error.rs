use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read library file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML library {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid drug library: {message}")]
    InvalidLibrary { message: String },
}

impl CatalogError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidLibrary {
            message: message.into(),
        }
    }
}
