//! Alignment computation engine
//!
//! This module computes new label positions from an anchor label snapshot,
//! producing an `AlignmentPlan` that can be applied to the host document.
//!
//! ## Single Pass
//!
//! 1. **Snapshot**: Read the anchor label (missing label aborts the pass)
//! 2. **Classify**: Decide horizontal/vertical from the anchor bounding box
//! 3. **Offset**: In relative mode, measure the anchor's offset from its footprint once
//! 4. **Targets**: Compute each target position from its own snapshot only
//! 5. **Apply**: Write every planned position back through the label accessor
//!
//! ## Axes
//!
//! All geometry is computed in `(along, across)` coordinates, where `along` is
//! the axis the alignment mode applies to (X for horizontal labels, Y for
//! vertical ones). Vertical labels remap `Left` to the top edge and `Right` to
//! the bottom edge.
//!
//! ## Key Functions
//!
//! - [`classify_orientation`]: Horizontal/vertical classification
//! - [`compute_offset`]: Anchor offset for relative mode
//! - [`compute_target_position`]: Position of one target label
//! - [`plan_alignment`]: Full pass over an [`AlignmentRequest`]

use crate::host::LabelAccessor;

use super::config::AlignConfig;
use super::error::AlignError;
use super::types::*;

/// Everything one pass needs: label kind, toggles, anchor and targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentRequest {
    pub kind: LabelKind,
    pub mode: AlignMode,
    pub position_mode: PositionMode,
    pub anchor: FootprintRef,
    pub targets: Vec<FootprintRef>,
}

impl AlignmentRequest {
    /// Build a request, dropping the anchor from `footprints` while keeping
    /// the order of the rest
    pub fn new(
        kind: LabelKind,
        config: &AlignConfig,
        anchor: FootprintRef,
        footprints: impl IntoIterator<Item = FootprintRef>,
    ) -> Self {
        let targets = footprints
            .into_iter()
            .filter(|fp| fp.id != anchor.id)
            .collect();
        Self {
            kind,
            mode: config.mode,
            position_mode: config.position_mode,
            anchor,
            targets,
        }
    }
}

/// A single planned label move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMove {
    pub footprint: FootprintRef,
    pub handle: LabelHandle,
    pub from: Point,
    pub to: Point,
}

/// Result of planning a pass, before anything is written
#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentPlan {
    pub kind: LabelKind,
    pub anchor: FootprintRef,
    pub orientation: Orientation,
    pub anchor_state: AnchorState,
    pub moves: Vec<LabelMove>,
    /// Targets without a label of the requested kind
    pub skipped: Vec<FootprintRef>,
}

impl AlignmentPlan {
    /// Write every planned position back, returning the number of labels moved
    pub fn apply<A: LabelAccessor + ?Sized>(&self, accessor: &mut A) -> usize {
        for mv in &self.moves {
            accessor.set_label_position(mv.handle, mv.to);
        }
        self.moves.len()
    }
}

/// Classify a label as vertical when it is taller than it is wide.
///
/// Square labels are horizontal.
pub fn classify_orientation(anchor: &LabelSnapshot) -> Orientation {
    if anchor.is_vertical() {
        Orientation::Vertical
    } else {
        Orientation::Horizontal
    }
}

/// Offset from the anchor footprint origin to the anchor label's aligned edge.
///
/// The alignment axis uses the edge picked by `mode`; the other axis always
/// measures to the label center.
pub fn compute_offset(
    anchor: &LabelSnapshot,
    anchor_origin: Point,
    mode: AlignMode,
    orientation: Orientation,
) -> Offset {
    let bbox = anchor.bounding_box();
    let (_, center_across) = orientation.split(bbox.center_x(), bbox.center_y());
    let (origin_along, origin_across) =
        orientation.split(anchor_origin.x as f64, anchor_origin.y as f64);

    let along = orientation.edge(&bbox, mode) - origin_along;
    let across = center_across - origin_across;
    let (dx, dy) = orientation.join(along, across);
    Offset { dx, dy }
}

/// New center of a target label.
///
/// In absolute mode the alignment axis follows the anchor edge and the other
/// axis resets to the target footprint origin. In relative mode both axes are
/// `origin + offset`, with the alignment axis shifted so that the named edge
/// of the target label (not its center) lands there. Coordinates truncate
/// toward zero.
pub fn compute_target_position(
    target_origin: Point,
    target_size: Size,
    anchor_state: &AnchorState,
    mode: AlignMode,
    orientation: Orientation,
) -> Point {
    let (origin_along, origin_across) =
        orientation.split(target_origin.x as f64, target_origin.y as f64);
    let shift = mode.edge_shift(orientation.extent(target_size));

    let (along, across) = match anchor_state {
        AnchorState::Absolute(anchor) => {
            let edge = orientation.edge(&anchor.bounding_box(), mode);
            (edge + shift, origin_across)
        }
        AnchorState::Relative(offset) => {
            let (offset_along, offset_across) = orientation.split(offset.dx, offset.dy);
            (
                origin_along + offset_along + shift,
                origin_across + offset_across,
            )
        }
    };

    let (x, y) = orientation.join(along, across);
    Point::new(x as i64, y as i64)
}

/// Plan a full pass without touching the document.
///
/// Fails only when the anchor lacks the requested label; targets without it
/// are recorded in [`AlignmentPlan::skipped`].
pub fn plan_alignment<A: LabelAccessor + ?Sized>(
    request: &AlignmentRequest,
    accessor: &A,
) -> Result<AlignmentPlan, AlignError> {
    let anchor_label = accessor
        .label(&request.anchor, request.kind)
        .ok_or_else(|| {
            AlignError::anchor_missing(request.anchor.display_name.as_str(), request.kind)
        })?;
    let anchor = anchor_label.snapshot;

    let orientation = classify_orientation(&anchor);
    let anchor_state = match request.position_mode {
        PositionMode::Absolute => AnchorState::Absolute(anchor),
        PositionMode::Relative => AnchorState::Relative(compute_offset(
            &anchor,
            request.anchor.origin,
            request.mode,
            orientation,
        )),
    };
    log::debug!(
        "aligning {} labels to {} ({}, {}, {}): {:?}",
        request.kind,
        request.anchor.display_name,
        orientation,
        request.mode,
        request.position_mode,
        anchor_state
    );

    let mut moves = Vec::with_capacity(request.targets.len());
    let mut skipped = Vec::new();

    for target in &request.targets {
        let Some(label) = accessor.label(target, request.kind) else {
            log::trace!("skipping {}: no {} label", target.display_name, request.kind);
            skipped.push(target.clone());
            continue;
        };

        let to = compute_target_position(
            target.origin,
            label.snapshot.size,
            &anchor_state,
            request.mode,
            orientation,
        );
        log::debug!(
            "{} {}: {} -> {}",
            target.display_name,
            request.kind,
            label.snapshot.center,
            to
        );
        moves.push(LabelMove {
            footprint: target.clone(),
            handle: label.handle,
            from: label.snapshot.center,
            to,
        });
    }

    Ok(AlignmentPlan {
        kind: request.kind,
        anchor: request.anchor.clone(),
        orientation,
        anchor_state,
        moves,
        skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(x: i64, y: i64, w: i64, h: i64) -> LabelSnapshot {
        LabelSnapshot::new(Point::new(x, y), w, h)
    }

    #[test]
    fn test_classify_orientation() {
        assert_eq!(classify_orientation(&snapshot(0, 0, 800, 200)), Orientation::Horizontal);
        assert_eq!(classify_orientation(&snapshot(0, 0, 200, 800)), Orientation::Vertical);
    }

    #[test]
    fn test_square_label_is_horizontal() {
        assert_eq!(classify_orientation(&snapshot(0, 0, 300, 300)), Orientation::Horizontal);
    }

    #[test]
    fn test_offset_horizontal_modes() {
        let anchor = snapshot(1000, 2000, 800, 200);
        let origin = Point::new(900, 1900);
        let h = Orientation::Horizontal;

        let left = compute_offset(&anchor, origin, AlignMode::Left, h);
        assert_eq!((left.dx, left.dy), (-300.0, 100.0));

        let center = compute_offset(&anchor, origin, AlignMode::Center, h);
        assert_eq!((center.dx, center.dy), (100.0, 100.0));

        let right = compute_offset(&anchor, origin, AlignMode::Right, h);
        assert_eq!((right.dx, right.dy), (500.0, 100.0));
    }

    #[test]
    fn test_offset_vertical_uses_top_and_bottom() {
        let anchor = snapshot(1000, 2000, 200, 800);
        let origin = Point::new(900, 1900);
        let v = Orientation::Vertical;

        // Top edge is 1600, bottom edge 2400; X always tracks the center
        let top = compute_offset(&anchor, origin, AlignMode::Left, v);
        assert_eq!((top.dx, top.dy), (100.0, -300.0));

        let bottom = compute_offset(&anchor, origin, AlignMode::Right, v);
        assert_eq!((bottom.dx, bottom.dy), (100.0, 500.0));
    }

    #[test]
    fn test_absolute_left_horizontal() {
        let state = AnchorState::Absolute(snapshot(1000, 2000, 800, 200));
        let pos = compute_target_position(
            Point::new(5000, 6000),
            Size::new(400, 200),
            &state,
            AlignMode::Left,
            Orientation::Horizontal,
        );
        assert_eq!(pos, Point::new(800, 6000));
    }

    #[test]
    fn test_absolute_right_horizontal() {
        let state = AnchorState::Absolute(snapshot(1000, 2000, 800, 200));
        let pos = compute_target_position(
            Point::new(5000, 6000),
            Size::new(400, 200),
            &state,
            AlignMode::Right,
            Orientation::Horizontal,
        );
        assert_eq!(pos, Point::new(1200, 6000));
    }

    #[test]
    fn test_absolute_center_ignores_target_size() {
        let state = AnchorState::Absolute(snapshot(1000, 2000, 800, 200));
        for width in [10, 400, 1601] {
            let pos = compute_target_position(
                Point::new(5000, 6000),
                Size::new(width, 200),
                &state,
                AlignMode::Center,
                Orientation::Horizontal,
            );
            assert_eq!(pos, Point::new(1000, 6000));
        }
    }

    #[test]
    fn test_absolute_vertical_top_and_bottom() {
        // Anchor spans y 1600..2400
        let state = AnchorState::Absolute(snapshot(1000, 2000, 200, 800));
        let target_origin = Point::new(5000, 6000);
        let size = Size::new(200, 400);

        let top = compute_target_position(
            target_origin,
            size,
            &state,
            AlignMode::Left,
            Orientation::Vertical,
        );
        assert_eq!(top, Point::new(5000, 1800));

        let bottom = compute_target_position(
            target_origin,
            size,
            &state,
            AlignMode::Right,
            Orientation::Vertical,
        );
        assert_eq!(bottom, Point::new(5000, 2200));
    }

    #[test]
    fn test_relative_left_puts_left_edge_at_offset() {
        let state = AnchorState::Relative(Offset {
            dx: -300.0,
            dy: 100.0,
        });
        let pos = compute_target_position(
            Point::new(5000, 6000),
            Size::new(400, 200),
            &state,
            AlignMode::Left,
            Orientation::Horizontal,
        );
        // Left edge at 4700, so the center is 200 further right
        assert_eq!(pos, Point::new(4900, 6100));
    }

    #[test]
    fn test_relative_vertical_bottom() {
        let state = AnchorState::Relative(Offset {
            dx: 100.0,
            dy: 500.0,
        });
        let pos = compute_target_position(
            Point::new(5000, 6000),
            Size::new(200, 400),
            &state,
            AlignMode::Right,
            Orientation::Vertical,
        );
        assert_eq!(pos, Point::new(5100, 6300));
    }

    #[test]
    fn test_relative_round_trip_reproduces_anchor() {
        let origin = Point::new(-1234, 777);
        for anchor in [snapshot(1001, 2003, 801, 200), snapshot(-55, 40, 120, 951)] {
            let orientation = classify_orientation(&anchor);
            for mode in [AlignMode::Left, AlignMode::Center, AlignMode::Right] {
                let offset = compute_offset(&anchor, origin, mode, orientation);
                let pos = compute_target_position(
                    origin,
                    anchor.size,
                    &AnchorState::Relative(offset),
                    mode,
                    orientation,
                );
                assert_eq!(pos, anchor.center, "mode {mode}, {orientation}");
            }
        }
    }

    #[test]
    fn test_result_truncates_toward_zero() {
        // Half of 401 is 200.5; 600 + 200.5 truncates to 800
        let state = AnchorState::Absolute(snapshot(1000, 2000, 800, 200));
        let pos = compute_target_position(
            Point::new(0, 0),
            Size::new(401, 200),
            &state,
            AlignMode::Left,
            Orientation::Horizontal,
        );
        assert_eq!(pos.x, 800);

        // Negative results truncate up, not down
        let state = AnchorState::Absolute(snapshot(-1000, 0, 800, 200));
        let pos = compute_target_position(
            Point::new(0, 0),
            Size::new(401, 200),
            &state,
            AlignMode::Left,
            Orientation::Horizontal,
        );
        assert_eq!(pos.x, -1199);
    }

    /// Document where no footprint carries any label
    struct Bare;

    impl LabelAccessor for Bare {
        fn label(&self, _: &FootprintRef, _: LabelKind) -> Option<Label> {
            None
        }

        fn set_label_position(&mut self, _: LabelHandle, _: Point) {}
    }

    #[test]
    fn test_missing_anchor_label_uses_display_name() {
        let anchor = FootprintRef::new(FootprintId(4), None, Point::new(0, 0))
            .with_display_name("<unnamed 3>");
        let config = AlignConfig::new();
        let request = AlignmentRequest::new(LabelKind::Value, &config, anchor, Vec::new());
        let err = plan_alignment(&request, &Bare).unwrap_err();
        assert_eq!(err, AlignError::anchor_missing("<unnamed 3>", LabelKind::Value));
    }

    #[test]
    fn test_footprint_display_name_defaults() {
        let named = FootprintRef::new(FootprintId(0), Some("R1".to_string()), Point::new(0, 0));
        let unnamed = FootprintRef::new(FootprintId(1), None, Point::new(0, 0));
        assert_eq!(named.display_name, "R1");
        assert_eq!(unnamed.display_name, "<unnamed>");
    }
}
