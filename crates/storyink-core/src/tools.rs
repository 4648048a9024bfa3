//! Tool selection and drawing settings.

use crate::annotation::SerializableColor;
use serde::{Deserialize, Serialize};

/// Available tools. Mutually exclusive; selected by the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Tool {
    #[default]
    Pen,
    Text,
    Eraser,
}

impl Tool {
    /// Display name for tooltips.
    pub fn label(&self) -> &'static str {
        match self {
            Tool::Pen => "Pen",
            Tool::Text => "Text",
            Tool::Eraser => "Eraser",
        }
    }
}

/// Stroke width bounds enforced by [`ToolSettings::set_stroke_width`].
pub const MIN_STROKE_WIDTH: f64 = 1.0;
pub const MAX_STROKE_WIDTH: f64 = 50.0;

/// Current drawing settings, owned by the application and read by the
/// annotation surface when a gesture starts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToolSettings {
    pub color: SerializableColor,
    pub stroke_width: f64,
}

impl ToolSettings {
    /// Set the stroke width, clamped to the supported range.
    pub fn set_stroke_width(&mut self, width: f64) {
        self.stroke_width = width.clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH);
    }
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            color: SerializableColor::black(),
            stroke_width: 5.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tool_is_pen() {
        assert_eq!(Tool::default(), Tool::Pen);
    }

    #[test]
    fn test_stroke_width_is_clamped() {
        let mut settings = ToolSettings::default();
        settings.set_stroke_width(0.0);
        assert!((settings.stroke_width - MIN_STROKE_WIDTH).abs() < f64::EPSILON);
        settings.set_stroke_width(500.0);
        assert!((settings.stroke_width - MAX_STROKE_WIDTH).abs() < f64::EPSILON);
        settings.set_stroke_width(12.0);
        assert!((settings.stroke_width - 12.0).abs() < f64::EPSILON);
    }
}
