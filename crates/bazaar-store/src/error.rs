//! # Error Types
//!
//! The store's mutations are infallible by contract; the only fallible edge
//! is the snapshot persistence seam. Failures there are logged and absorbed
//! by the store (in-memory state stays authoritative), never surfaced to the
//! presentation layer.

use thiserror::Error;

/// Snapshot persistence errors.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Reading or writing the backing slot failed.
    #[error("snapshot i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding or decoding the snapshot failed.
    #[error("snapshot serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Convenience type alias for Results with SnapshotError.
pub type SnapshotResult<T> = Result<T, SnapshotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SnapshotError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert!(err.to_string().starts_with("snapshot i/o failed"));

        let bad_json = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = SnapshotError::from(bad_json);
        assert!(err.to_string().starts_with("snapshot serialization failed"));
    }
}
