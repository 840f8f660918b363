use std::error::Error;
use thiserror::Error;

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Error raised by key-value backends regardless of where the data lives.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend could not be read or written.
    #[error("storage unavailable: {message}")]
    Unavailable {
        /// What the backend was doing.
        message: String,
        /// Underlying I/O or encoding failure.
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
    /// A stored value could not be encoded or decoded.
    #[error("invalid value stored under `{key}`")]
    InvalidValue {
        /// Key the value lives under.
        key: String,
        /// Decoder or encoder failure.
        #[source]
        source: serde_json::Error,
    },
    /// A writer panicked while holding the store lock.
    #[error("storage lock poisoned")]
    Poisoned,
}

impl StorageError {
    /// Construct an unavailable error from any backend failure.
    pub fn unavailable(message: String, source: impl Error + Send + Sync + 'static) -> Self {
        StorageError::Unavailable {
            message,
            source: Box::new(source),
        }
    }

    /// Wrap a JSON failure for the value under `key`.
    pub fn invalid_value(key: &str, source: serde_json::Error) -> Self {
        StorageError::InvalidValue {
            key: key.to_string(),
            source,
        }
    }
}
