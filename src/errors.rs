//! Structured error types for modalis
//!
//! Uses thiserror for ergonomic error definitions with automatic Display
//! and Error trait implementations.

use std::fmt;
use thiserror::Error;

/// Which hook was running when a dialog action failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookStage {
    /// `on_confirm` of the current request
    Confirm,
    /// `on_cancel` of the current request
    Cancel,
    /// `on_click` of a custom button
    Button(usize),
}

impl fmt::Display for HookStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Confirm => write!(f, "on_confirm"),
            Self::Cancel => write!(f, "on_cancel"),
            Self::Button(index) => write!(f, "button #{index} on_click"),
        }
    }
}

/// All possible errors in modalis
#[derive(Error, Debug)]
pub enum DialogError {
    /// Capability lookup happened outside a provider scope
    #[error("use_dialog must be called within a DialogProvider scope")]
    MissingProvider,

    /// Handle used after its provider was dropped
    #[error("DialogProvider was unmounted; this handle is no longer usable")]
    ProviderUnmounted,

    /// A caller-supplied hook returned an error; the dialog stays open
    #[error("Dialog {stage} hook failed: {source}")]
    Hook {
        stage: HookStage,
        #[source]
        source: HookError,
    },
}

/// Error returned by an async dialog hook
#[derive(Error, Debug)]
#[error("{0}")]
pub struct HookError(Box<dyn std::error::Error + Send + Sync + 'static>);

impl HookError {
    /// Wrap any error type
    pub fn new(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self(err.into())
    }

    /// Build a hook error from a plain message
    pub fn msg(message: impl Into<String>) -> Self {
        Self(message.into().into())
    }
}

impl From<std::io::Error> for HookError {
    fn from(err: std::io::Error) -> Self {
        Self::new(err)
    }
}

/// Convenience Result type using DialogError
pub type Result<T> = std::result::Result<T, DialogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hook_error_display() {
        let err = DialogError::Hook {
            stage: HookStage::Button(1),
            source: HookError::msg("network down"),
        };
        assert_eq!(
            err.to_string(),
            "Dialog button #1 on_click hook failed: network down"
        );
    }

    #[test]
    fn test_missing_provider_message() {
        assert!(DialogError::MissingProvider
            .to_string()
            .contains("DialogProvider"));
    }
}
