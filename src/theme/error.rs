//! Preference storage errors.

use std::path::PathBuf;

/// Error returned when persistent preference storage fails.
///
/// Storage failure is always non-fatal for theme resolution: the store
/// catches these locally and keeps going with in-memory state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Reading the preference file failed.
    Read { path: PathBuf, reason: String },
    /// Writing the preference file failed.
    Write { path: PathBuf, reason: String },
    /// The storage backend refused access outright.
    Denied { reason: String },
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Read { path, reason } => {
                write!(f, "failed to read preference from '{}': {}", path.display(), reason)
            }
            StorageError::Write { path, reason } => {
                write!(f, "failed to write preference to '{}': {}", path.display(), reason)
            }
            StorageError::Denied { reason } => {
                write!(f, "preference storage denied: {}", reason)
            }
        }
    }
}

impl std::error::Error for StorageError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_display() {
        let err = StorageError::Read {
            path: PathBuf::from("/tmp/prefs.json"),
            reason: "permission denied".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/prefs.json"));
        assert!(msg.contains("permission denied"));
    }

    #[test]
    fn test_denied_error_display() {
        let err = StorageError::Denied {
            reason: "storage disabled".to_string(),
        };
        assert!(err.to_string().contains("storage disabled"));
    }
}
