//! Error types for the alignment engine

use thiserror::Error;

use crate::host::{Notification, Severity};

use super::types::LabelKind;

/// Reasons an alignment pass stops before moving anything
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlignError {
    /// Fewer than two footprints were selected
    #[error("at least two footprints must be selected, found {selected}")]
    InsufficientSelection { selected: usize },

    /// The user dismissed the anchor prompt
    #[error("anchor selection cancelled")]
    AnchorCancelled,

    /// The anchor footprint has no label of the requested kind
    #[error("anchor footprint '{anchor}' has no {kind} label")]
    AnchorMissingLabel { anchor: String, kind: LabelKind },

    /// The anchor prompt could not be shown or answered
    #[error("anchor prompt failed: {reason}")]
    PromptFailed { reason: String },
}

impl AlignError {
    /// Create an insufficient selection error
    pub fn insufficient(selected: usize) -> Self {
        Self::InsufficientSelection { selected }
    }

    /// Create an anchor missing label error
    pub fn anchor_missing(anchor: impl Into<String>, kind: LabelKind) -> Self {
        Self::AnchorMissingLabel {
            anchor: anchor.into(),
            kind,
        }
    }

    /// Create a prompt failure error from whatever broke the prompt
    pub fn prompt_failed(reason: impl ToString) -> Self {
        Self::PromptFailed {
            reason: reason.to_string(),
        }
    }

    /// Severity of the notification shown for this error; `None` aborts silently
    pub fn severity(&self) -> Option<Severity> {
        match self {
            Self::InsufficientSelection { .. } => Some(Severity::Warning),
            Self::AnchorCancelled => None,
            Self::AnchorMissingLabel { .. } | Self::PromptFailed { .. } => Some(Severity::Error),
        }
    }

    /// The user-facing notification for this error, if any
    pub fn notification(&self) -> Option<Notification> {
        let severity = self.severity()?;
        let message = match self {
            Self::InsufficientSelection { .. } => {
                "Please select at least two footprints to align.".to_string()
            }
            Self::AnchorMissingLabel { anchor, kind } => {
                format!("Anchor footprint {} has no {} text.", anchor, kind)
            }
            Self::PromptFailed { reason } => {
                format!("Could not read the anchor choice: {}", reason)
            }
            Self::AnchorCancelled => return None,
        };
        Some(Notification::new(message, severity))
    }
}
