use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CanvasError;

/// The drawing tools. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolType {
    /// Freehand strokes in the current color
    #[default]
    Pen,
    /// Freehand strokes in the canvas background color
    Eraser,
    /// Flood fill of the clicked region
    Fill,
    /// Places the selected shape
    Shape,
}

impl ToolType {
    pub const ALL: [ToolType; 4] = [
        ToolType::Pen,
        ToolType::Eraser,
        ToolType::Fill,
        ToolType::Shape,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ToolType::Pen => "pen",
            ToolType::Eraser => "eraser",
            ToolType::Fill => "fill",
            ToolType::Shape => "shape",
        }
    }
}

impl fmt::Display for ToolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ToolType {
    type Err = CanvasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolType::ALL
            .into_iter()
            .find(|tool| tool.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CanvasError::UnknownTool(s.to_owned()))
    }
}
