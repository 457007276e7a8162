//! Footprint Label Align - line up footprint reference and value labels
//!
//! This library provides the alignment engine, the host capability traits it
//! runs against, and a TOML board document implementing them.
//!
//! # Example
//!
//! ```rust
//! use fp_label_align::{
//!     run_alignment, AlignConfig, AlignMode, AnchorCandidate, Board, FootprintRef, LabelKind,
//!     Notification,
//! };
//!
//! let mut board = Board::from_toml_str(r#"
//!     [[footprint]]
//!     reference = "R1"
//!     origin = [0, 0]
//!     selected = true
//!     reference_label = { text = "R1", position = [1000, 2000], width = 800, height = 200 }
//!
//!     [[footprint]]
//!     reference = "R2"
//!     origin = [5000, 6000]
//!     selected = true
//!     reference_label = { text = "R2", position = [5000, 5000], width = 400, height = 200 }
//! "#).unwrap();
//!
//! // Always pick R1 as the anchor
//! let mut picker = |c: &[AnchorCandidate]| -> Option<FootprintRef> {
//!     c.iter().find(|c| c.display_name == "R1").map(|c| c.footprint.clone())
//! };
//! let mut notes: Vec<Notification> = Vec::new();
//! let config = AlignConfig::new().with_mode(AlignMode::Left);
//!
//! let report = run_alignment(&mut board, &mut picker, &mut notes, LabelKind::Reference, &config)
//!     .unwrap();
//! assert_eq!(report.moved, 1);
//! assert_eq!(board.footprints[1].reference_label.as_ref().unwrap().position, [800, 6000]);
//! ```

pub mod align;
pub mod board;
pub mod command;
pub mod error;
pub mod host;

pub use align::{
    AlignConfig, AlignError, AlignMode, AlignmentPlan, AlignmentRequest, FootprintId,
    FootprintRef, LabelKind, Point, PositionMode,
};
pub use board::Board;
pub use command::{
    anchor_candidates, prepare_alignment, run_alignment, AlignmentReport, PreparedAlignment,
};
pub use error::BoardError;
pub use host::{
    AnchorCandidate, AnchorPicker, LabelAccessor, Notification, Notifier, RefreshTrigger,
    SelectionProvider, Severity,
};
