//! Error types for the manager.
//!
//! Gesture classification itself never fails. Errors only come from the
//! boundaries: registering listeners with the host, and reading or watching
//! the settings file.

use crate::host::{ListenerKind, Target};
use thiserror::Error;

/// The host refused to register a listener.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot bind {kind:?} listener on {target}: {reason}")]
pub struct BindError {
    pub target: Target,
    pub kind: ListenerKind,
    pub reason: String,
}

impl BindError {
    pub fn new(target: Target, kind: ListenerKind, reason: impl Into<String>) -> Self {
        Self {
            target,
            kind,
            reason: reason.into(),
        }
    }
}

/// Errors that can occur while configuring a manager
#[derive(Error, Debug)]
pub enum ManagerError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings JSON could not be parsed or written
    #[error("settings JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Settings file could not be watched
    #[error("settings watch error: {0}")]
    Watch(#[from] notify::Error),

    /// Listener registration failed; the manager was left unbound
    #[error(transparent)]
    Bind(#[from] BindError),
}

/// Result type alias for manager operations
pub type ManagerResult<T> = Result<T, ManagerError>;
