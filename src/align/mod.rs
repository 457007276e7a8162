//! Alignment engine for footprint text labels
//!
//! This module takes an anchor label and a set of target footprints and
//! computes where each target's label goes, producing an `AlignmentPlan`.

pub mod config;
pub mod engine;
pub mod error;
pub mod types;

pub use config::AlignConfig;
pub use engine::{
    classify_orientation, compute_offset, compute_target_position, plan_alignment,
    AlignmentPlan, AlignmentRequest, LabelMove,
};
pub use error::AlignError;
pub use types::*;
