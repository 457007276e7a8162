//! Configuration for an alignment pass

use super::types::{AlignMode, PositionMode};

/// The two user-facing toggles passed into every alignment pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AlignConfig {
    /// Edge (or center) of the anchor label to line up with
    pub mode: AlignMode,

    /// Snap to absolute anchor edges or copy the anchor's footprint offset
    pub position_mode: PositionMode,
}

impl AlignConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the alignment mode
    pub fn with_mode(mut self, mode: AlignMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the position mode
    pub fn with_position_mode(mut self, position_mode: PositionMode) -> Self {
        self.position_mode = position_mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AlignConfig::default();
        assert_eq!(config.mode, AlignMode::Left);
        assert_eq!(config.position_mode, PositionMode::Absolute);
    }

    #[test]
    fn test_builder_pattern() {
        let config = AlignConfig::new()
            .with_mode(AlignMode::Right)
            .with_position_mode(PositionMode::Relative);

        assert_eq!(config.mode, AlignMode::Right);
        assert_eq!(config.position_mode, PositionMode::Relative);
    }
}
