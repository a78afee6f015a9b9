use std::fmt;

/// Error type for key-value storage operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    LockPoisoned(&'static str),
    /// Reading or writing the backing medium failed.
    Io(String),
    /// Serialization/deserialization error.
    Serde(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::LockPoisoned(operation) => {
                write!(f, "storage lock poisoned during {}", operation)
            }
            StorageError::Io(msg) => write!(f, "storage io error: {}", msg),
            StorageError::Serde(msg) => write!(f, "storage serialization error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serde(err.to_string())
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err.to_string())
    }
}

/// Rejection of a submitted form before anything reaches the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required fields that were empty after trimming, by form field name.
    MissingFields(Vec<&'static str>),
    /// The price field did not hold a finite, non-negative number.
    InvalidPrice(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingFields(fields) => {
                write!(f, "missing required fields: {}", fields.join(", "))
            }
            ValidationError::InvalidPrice(value) => write!(f, "invalid price: {:?}", value),
        }
    }
}

impl std::error::Error for ValidationError {}
