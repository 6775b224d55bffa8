use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors returned by [`ConfigStore`](super::ConfigStore) operations.
///
/// Schema mismatches inside a profile are not errors; the affected field is skipped
/// while decoding.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no config at index {0}")]
    UnknownConfig(usize),

    #[error("invalid config name: {0:?}")]
    InvalidName(String),

    #[error("a config named {0:?} already exists")]
    DuplicateName(String),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0} does not contain a JSON object")]
    NotAnObject(Utf8PathBuf),

    #[error("failed to serialize settings: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
