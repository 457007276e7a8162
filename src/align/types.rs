//! Core types for the alignment engine

use std::fmt;

/// A point in integer board units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Extents of a label's bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: i64,
    pub height: i64,
}

impl Size {
    pub fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned bounding box, in fractional board units so half extents stay exact
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build the box of a label from its center point and extents
    pub fn centered(center: Point, size: Size) -> Self {
        let width = size.width as f64;
        let height = size.height as f64;
        Self::new(
            center.x as f64 - width / 2.0,
            center.y as f64 - height / 2.0,
            width,
            height,
        )
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }
}

/// Which footprint text label an alignment pass operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum LabelKind {
    Reference,
    Value,
}

impl LabelKind {
    /// Singular noun used in user-facing messages
    pub fn noun(self) -> &'static str {
        match self {
            LabelKind::Reference => "reference",
            LabelKind::Value => "value",
        }
    }

    /// Plural noun used in user-facing messages
    pub fn plural(self) -> &'static str {
        match self {
            LabelKind::Reference => "references",
            LabelKind::Value => "values",
        }
    }
}

impl fmt::Display for LabelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}

/// Edge (or center) of the anchor label that targets line up with.
///
/// For vertical labels `Left` means the top edge and `Right` the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum AlignMode {
    #[default]
    Left,
    Center,
    Right,
}

impl AlignMode {
    /// Shift from the aligned edge to the label center, for a label of `extent`
    /// along the aligned axis
    pub fn edge_shift(self, extent: f64) -> f64 {
        match self {
            AlignMode::Left => extent / 2.0,
            AlignMode::Center => 0.0,
            AlignMode::Right => -extent / 2.0,
        }
    }
}

impl fmt::Display for AlignMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlignMode::Left => write!(f, "left"),
            AlignMode::Center => write!(f, "center"),
            AlignMode::Right => write!(f, "right"),
        }
    }
}

/// Whether targets snap to the anchor's absolute edges or copy its offset
/// from its own footprint origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum PositionMode {
    #[default]
    Absolute,
    Relative,
}

impl fmt::Display for PositionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionMode::Absolute => write!(f, "absolute"),
            PositionMode::Relative => write!(f, "relative"),
        }
    }
}

/// Binary rotation class of a label, inferred from its bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Split an `(x, y)` pair into `(along, across)` the alignment axis
    pub fn split(self, x: f64, y: f64) -> (f64, f64) {
        match self {
            Orientation::Horizontal => (x, y),
            Orientation::Vertical => (y, x),
        }
    }

    /// Inverse of [`Orientation::split`]
    pub fn join(self, along: f64, across: f64) -> (f64, f64) {
        match self {
            Orientation::Horizontal => (along, across),
            Orientation::Vertical => (across, along),
        }
    }

    /// Extent of `size` along the alignment axis
    pub fn extent(self, size: Size) -> f64 {
        match self {
            Orientation::Horizontal => size.width as f64,
            Orientation::Vertical => size.height as f64,
        }
    }

    /// Coordinate of the edge (or center) picked by `mode` on the alignment axis
    pub fn edge(self, bbox: &BoundingBox, mode: AlignMode) -> f64 {
        match (self, mode) {
            (Orientation::Horizontal, AlignMode::Left) => bbox.left(),
            (Orientation::Horizontal, AlignMode::Center) => bbox.center_x(),
            (Orientation::Horizontal, AlignMode::Right) => bbox.right(),
            (Orientation::Vertical, AlignMode::Left) => bbox.top(),
            (Orientation::Vertical, AlignMode::Center) => bbox.center_y(),
            (Orientation::Vertical, AlignMode::Right) => bbox.bottom(),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "horizontal"),
            Orientation::Vertical => write!(f, "vertical"),
        }
    }
}

/// Opaque identifier of a footprint in the host document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FootprintId(pub usize);

/// A footprint as seen by the engine: identity, display name and origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FootprintRef {
    pub id: FootprintId,
    /// Reference designator text; `None` when the footprint has none
    pub name: Option<String>,
    pub origin: Point,
    /// Name shown to the user in prompts, notifications and logs
    pub display_name: String,
}

impl FootprintRef {
    /// A footprint displayed by its reference, or `<unnamed>` without one
    pub fn new(id: FootprintId, name: Option<String>, origin: Point) -> Self {
        let display_name = name.clone().unwrap_or_else(|| "<unnamed>".to_string());
        Self {
            id,
            name,
            origin,
            display_name,
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }
}

/// Opaque handle to one label of one footprint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LabelHandle {
    pub footprint: FootprintId,
    pub kind: LabelKind,
}

/// Read-only view of a label taken at the start of a pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelSnapshot {
    pub center: Point,
    pub size: Size,
}

impl LabelSnapshot {
    pub fn new(center: Point, width: i64, height: i64) -> Self {
        Self {
            center,
            size: Size::new(width, height),
        }
    }

    pub fn is_vertical(&self) -> bool {
        self.size.height > self.size.width
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::centered(self.center, self.size)
    }
}

/// A label snapshot together with the handle used to write it back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label {
    pub handle: LabelHandle,
    pub snapshot: LabelSnapshot,
}

/// Displacement from the anchor footprint origin to the anchor label's
/// aligned edge (or center)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offset {
    pub dx: f64,
    pub dy: f64,
}

/// What the anchor contributes to every target's position
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnchorState {
    /// Absolute mode: the anchor label itself
    Absolute(LabelSnapshot),
    /// Relative mode: the anchor's offset from its own footprint origin
    Relative(Offset),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_bounding_box_edges() {
        let bbox = BoundingBox::centered(Point::new(1000, 2000), Size::new(800, 200));
        assert_eq!(bbox.left(), 600.0);
        assert_eq!(bbox.right(), 1400.0);
        assert_eq!(bbox.top(), 1900.0);
        assert_eq!(bbox.bottom(), 2100.0);
        assert_eq!(bbox.center_x(), 1000.0);
        assert_eq!(bbox.center_y(), 2000.0);
    }

    #[test]
    fn test_odd_extent_keeps_half_units() {
        let bbox = BoundingBox::centered(Point::new(0, 0), Size::new(5, 3));
        assert_eq!(bbox.left(), -2.5);
        assert_eq!(bbox.bottom(), 1.5);
    }

    #[test]
    fn test_split_join_vertical_swaps_axes() {
        assert_eq!(Orientation::Vertical.split(1.0, 2.0), (2.0, 1.0));
        assert_eq!(Orientation::Vertical.join(2.0, 1.0), (1.0, 2.0));
        assert_eq!(Orientation::Horizontal.split(1.0, 2.0), (1.0, 2.0));
    }

    #[test]
    fn test_vertical_edge_remap() {
        let bbox = BoundingBox::centered(Point::new(0, 0), Size::new(100, 400));
        assert_eq!(Orientation::Vertical.edge(&bbox, AlignMode::Left), bbox.top());
        assert_eq!(Orientation::Vertical.edge(&bbox, AlignMode::Right), bbox.bottom());
        assert_eq!(Orientation::Vertical.edge(&bbox, AlignMode::Center), 0.0);
    }

    #[test]
    fn test_edge_shift_signs() {
        assert_eq!(AlignMode::Left.edge_shift(400.0), 200.0);
        assert_eq!(AlignMode::Center.edge_shift(400.0), 0.0);
        assert_eq!(AlignMode::Right.edge_shift(400.0), -200.0);
    }

    #[test]
    fn test_label_kind_nouns() {
        assert_eq!(LabelKind::Reference.to_string(), "reference");
        assert_eq!(LabelKind::Value.plural(), "values");
    }
}
