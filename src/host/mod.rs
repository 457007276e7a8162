//! Capabilities the alignment pass needs from the host board editor
//!
//! The engine never touches the board model directly. Each collaborator is a
//! small trait so that the board document, a terminal, or a test harness can
//! stand in for the editor.

pub mod terminal;

use std::fmt;
use std::io;

use crate::align::{FootprintRef, Label, LabelHandle, LabelKind, Point};

pub use terminal::{TerminalNotifier, TerminalPicker};

/// Source of the footprints the user selected
pub trait SelectionProvider {
    fn selected_footprints(&self) -> Vec<FootprintRef>;
}

/// Read and write access to footprint labels
pub trait LabelAccessor {
    /// The label of `kind` on `footprint`, or `None` when it is absent or empty
    fn label(&self, footprint: &FootprintRef, kind: LabelKind) -> Option<Label>;

    /// Move a label so its center sits at `position`
    fn set_label_position(&mut self, handle: LabelHandle, position: Point);
}

/// Redraws the document after a pass mutated it
pub trait RefreshTrigger {
    fn refresh(&mut self);
}

/// A footprint offered as anchor, with the name shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorCandidate {
    pub display_name: String,
    pub footprint: FootprintRef,
}

/// Lets the user pick the anchor.
///
/// `Ok(None)` means the prompt was dismissed; `Err` means it could not be
/// shown or answered at all.
pub trait AnchorPicker {
    fn choose_anchor(
        &mut self,
        candidates: &[AnchorCandidate],
    ) -> io::Result<Option<FootprintRef>>;
}

impl<F> AnchorPicker for F
where
    F: FnMut(&[AnchorCandidate]) -> Option<FootprintRef>,
{
    fn choose_anchor(
        &mut self,
        candidates: &[AnchorCandidate],
    ) -> io::Result<Option<FootprintRef>> {
        Ok(self(candidates))
    }
}

/// Severity of a user notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info)
    }
}

/// Reports outcomes to the user, fire-and-forget
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// Collects notifications, mostly useful for previews and tests
impl Notifier for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}
