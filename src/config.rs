use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::command::DEFAULT_HISTORY_CAPACITY;
use crate::error::{CanvasError, CanvasResult};

/// How the shape tool turns pointer input into a shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeMode {
    /// A click places a filled shape of `stamp_size` centred on the pointer
    #[default]
    Stamp,
    /// Dragging spans the shape's bounding box; the shape is outlined
    Drag,
}

/// Settings fixed for the lifetime of a drawing session.
///
/// Every field has a default, so a config file only needs the keys it
/// wants to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub width: u32,
    pub height: u32,
    /// Canvas fill on creation; also what the eraser and clear paint with
    pub background: Color,
    pub initial_color: Color,
    /// Diameter of pen and eraser strokes
    pub stroke_width: f32,
    /// Line width of outlined (dragged) shapes
    pub shape_stroke_width: f32,
    /// Side of the box a stamped shape is fitted into
    pub stamp_size: f32,
    pub history_capacity: usize,
    pub shape_mode: ShapeMode,
    /// Name offered when the canvas is exported
    pub export_file_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background: Color::WHITE,
            initial_color: Color::BLACK,
            stroke_width: 5.0,
            shape_stroke_width: 3.0,
            stamp_size: 40.0,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            shape_mode: ShapeMode::Stamp,
            export_file_name: "tuval.png".to_owned(),
        }
    }
}

impl SessionConfig {
    pub fn from_json_str(json: &str) -> CanvasResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON config file
    pub fn load(path: impl AsRef<Path>) -> CanvasResult<Self> {
        let path = path.as_ref();
        log::info!("Loading session config from {}", path.display());
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> CanvasResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> CanvasResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CanvasError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.history_capacity == 0 {
            return Err(CanvasError::InvalidConfig(
                "history_capacity must be at least 1".to_owned(),
            ));
        }
        for (name, value) in [
            ("stroke_width", self.stroke_width),
            ("shape_stroke_width", self.shape_stroke_width),
            ("stamp_size", self.stamp_size),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(CanvasError::InvalidConfig(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        if self.export_file_name.trim().is_empty() {
            return Err(CanvasError::InvalidConfig(
                "export_file_name must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}
