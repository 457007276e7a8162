//! In-memory board document loaded from TOML
//!
//! The document lists footprints with their origin, selection flag and the
//! two text labels. It implements the host capabilities so an alignment pass
//! can run against it and the result can be written back out.
//!
//! ```toml
//! [[footprint]]
//! reference = "R1"
//! origin = [900, 1900]
//! selected = true
//!
//! [footprint.reference_label]
//! text = "R1"
//! position = [1000, 2000]
//! width = 800
//! height = 200
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::align::{
    FootprintId, FootprintRef, Label, LabelHandle, LabelKind, LabelSnapshot, Point,
};
use crate::error::BoardError;
use crate::host::{LabelAccessor, RefreshTrigger, SelectionProvider};

/// A text label owned by a footprint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextLabel {
    /// Rendered text; empty text means the label is suppressed
    #[serde(default)]
    pub text: String,
    /// Center of the label's bounding box
    pub position: [i64; 2],
    pub width: i64,
    pub height: i64,
}

impl TextLabel {
    pub fn center(&self) -> Point {
        Point::new(self.position[0], self.position[1])
    }

    fn snapshot(&self) -> LabelSnapshot {
        LabelSnapshot::new(self.center(), self.width, self.height)
    }
}

/// A placed footprint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footprint {
    #[serde(default)]
    pub reference: String,
    pub origin: [i64; 2],
    #[serde(default)]
    pub selected: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_label: Option<TextLabel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_label: Option<TextLabel>,
}

impl Footprint {
    pub fn origin(&self) -> Point {
        Point::new(self.origin[0], self.origin[1])
    }

    pub fn text_label(&self, kind: LabelKind) -> Option<&TextLabel> {
        match kind {
            LabelKind::Reference => self.reference_label.as_ref(),
            LabelKind::Value => self.value_label.as_ref(),
        }
    }

    fn text_label_mut(&mut self, kind: LabelKind) -> Option<&mut TextLabel> {
        match kind {
            LabelKind::Reference => self.reference_label.as_mut(),
            LabelKind::Value => self.value_label.as_mut(),
        }
    }
}

/// A board document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    #[serde(rename = "footprint", default)]
    pub footprints: Vec<Footprint>,

    /// Incremented on every refresh
    #[serde(skip)]
    revision: u64,
}

impl Board {
    pub fn new(footprints: Vec<Footprint>) -> Self {
        Self {
            footprints,
            revision: 0,
        }
    }

    /// Load a board from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, BoardError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load a board from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, BoardError> {
        let board: Board = toml::from_str(content)?;
        board.validate()?;
        Ok(board)
    }

    /// Serialize the board back to TOML
    pub fn to_toml_string(&self) -> Result<String, BoardError> {
        Ok(toml::to_string(self)?)
    }

    /// Number of refreshes since the board was loaded
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn footprint(&self, id: FootprintId) -> Option<&Footprint> {
        self.footprints.get(id.0)
    }

    fn validate(&self) -> Result<(), BoardError> {
        for fp in &self.footprints {
            for kind in [LabelKind::Reference, LabelKind::Value] {
                let Some(label) = fp.text_label(kind) else {
                    continue;
                };
                if label.width < 0 {
                    return Err(BoardError::invalid_label(&fp.reference, kind, "negative width"));
                }
                if label.height < 0 {
                    return Err(BoardError::invalid_label(&fp.reference, kind, "negative height"));
                }
            }
        }
        Ok(())
    }

    fn footprint_ref(id: usize, fp: &Footprint) -> FootprintRef {
        let name = (!fp.reference.is_empty()).then(|| fp.reference.clone());
        FootprintRef::new(FootprintId(id), name, fp.origin())
    }
}

impl SelectionProvider for Board {
    fn selected_footprints(&self) -> Vec<FootprintRef> {
        self.footprints
            .iter()
            .enumerate()
            .filter(|(_, fp)| fp.selected)
            .map(|(i, fp)| Self::footprint_ref(i, fp))
            .collect()
    }
}

impl LabelAccessor for Board {
    fn label(&self, footprint: &FootprintRef, kind: LabelKind) -> Option<Label> {
        let label = self.footprint(footprint.id)?.text_label(kind)?;
        if label.text.is_empty() {
            return None;
        }
        Some(Label {
            handle: LabelHandle {
                footprint: footprint.id,
                kind,
            },
            snapshot: label.snapshot(),
        })
    }

    fn set_label_position(&mut self, handle: LabelHandle, position: Point) {
        let label = self
            .footprints
            .get_mut(handle.footprint.0)
            .and_then(|fp| fp.text_label_mut(handle.kind));
        match label {
            Some(label) => label.position = [position.x, position.y],
            None => log::warn!("no {} label for footprint #{}", handle.kind, handle.footprint.0),
        }
    }
}

impl RefreshTrigger for Board {
    fn refresh(&mut self) {
        self.revision += 1;
        log::debug!("board refreshed (revision {})", self.revision);
    }
}
