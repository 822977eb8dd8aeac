//! Error types for profile provisioning

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type ProfileResult<T> = Result<T, ProfileError>;

#[derive(Debug, Error)]
pub enum ProfileError {
    /// The allocated profile directory is already on disk
    #[error("profile already exists: {}", .0.display())]
    AlreadyExists(PathBuf),
    #[error("profile not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unexpected Local State layout in {}: {reason}", path.display())]
    InvalidRegistry { path: PathBuf, reason: String },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ProfileError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
