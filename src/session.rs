use egui::{Rect, Vec2, pos2};

use crate::color::Color;
use crate::command::UndoHistory;
use crate::config::{SessionConfig, ShapeMode};
use crate::error::{CanvasError, CanvasResult};
use crate::fill::flood_fill;
use crate::geometry::{pixel_center, pixel_rect};
use crate::pixel_buffer::PixelBuffer;
use crate::raster::{ShapeKind, ShapeStyle, StrokePath, draw_shape};
use crate::state::EditorState;
use crate::tools::ToolType;

/// Owns the canvas, its undo history and the tool settings, and turns
/// pointer and toolbar commands into canvas edits.
///
/// Every edit snapshots the canvas into the history before touching a
/// pixel, and nothing outside the session can reach the buffer mutably, so
/// each edit is undoable in one step.
#[derive(Debug)]
pub struct DrawingSession {
    buffer: PixelBuffer,
    history: UndoHistory,
    state: EditorState,
    tool: ToolType,
    color: Color,
    shape: Option<ShapeKind>,
    config: SessionConfig,
    /// Bumped on every pixel change so displays know when to refresh
    revision: u64,
}

impl DrawingSession {
    pub fn new(config: SessionConfig) -> CanvasResult<Self> {
        config.validate()?;
        let buffer = PixelBuffer::new(config.width, config.height, config.background)?;
        log::info!(
            "Created {}x{} drawing session ({:?} shapes)",
            config.width,
            config.height,
            config.shape_mode
        );

        Ok(Self {
            buffer,
            history: UndoHistory::new(config.history_capacity),
            state: EditorState::Idle,
            tool: ToolType::default(),
            color: config.initial_color,
            shape: None,
            config,
            revision: 0,
        })
    }

    /// Session with default settings and the given canvas size
    pub fn with_size(width: u32, height: u32) -> CanvasResult<Self> {
        Self::new(SessionConfig {
            width,
            height,
            ..SessionConfig::default()
        })
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn tool(&self) -> ToolType {
        self.tool
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn shape(&self) -> Option<ShapeKind> {
        self.shape
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn export_file_name(&self) -> &str {
        &self.config.export_file_name
    }

    // --- tool state -------------------------------------------------------

    /// Selects a tool by name. Any tool other than `shape` drops the shape
    /// selection.
    pub fn set_tool(&mut self, name: &str) -> CanvasResult<()> {
        let tool = name.parse::<ToolType>().inspect_err(|err| log::warn!("{err}"))?;
        self.select_tool(tool);
        Ok(())
    }

    pub fn select_tool(&mut self, tool: ToolType) {
        if tool != ToolType::Shape {
            self.shape = None;
        }
        log::debug!("Tool changed: {} -> {}", self.tool, tool);
        self.tool = tool;
    }

    /// Sets the paint color from `#RRGGBB`; a malformed string keeps the
    /// previous color
    pub fn set_color(&mut self, hex: &str) -> CanvasResult<()> {
        let color = Color::from_hex(hex).inspect_err(|err| log::warn!("{err}"))?;
        self.select_color(color);
        Ok(())
    }

    pub fn select_color(&mut self, color: Color) {
        log::debug!("Color changed: {} -> {}", self.color, color);
        self.color = color;
    }

    pub fn set_shape(&mut self, name: &str) -> CanvasResult<()> {
        let shape = name.parse::<ShapeKind>().inspect_err(|err| log::warn!("{err}"))?;
        self.select_shape(shape);
        Ok(())
    }

    pub fn select_shape(&mut self, shape: ShapeKind) {
        log::debug!("Shape selected: {}", shape);
        self.shape = Some(shape);
    }

    // --- pointer input ----------------------------------------------------

    pub fn pointer_down(&mut self, x: i32, y: i32) -> CanvasResult<()> {
        // A down without the matching up (e.g. focus lost) ends the old gesture
        if !self.state.is_idle() {
            self.pointer_up()?;
        }
        self.ensure_on_canvas(x, y)?;

        match self.tool {
            ToolType::Fill => {
                self.checkpoint();
                flood_fill(&mut self.buffer, x, y, self.color)?;
                self.touch();
            }
            ToolType::Shape => {
                let kind = self.shape.ok_or(CanvasError::NoShapeSelected)?;
                match self.config.shape_mode {
                    ShapeMode::Stamp => {
                        self.checkpoint();
                        let bounds = Rect::from_center_size(
                            pos2(x as f32, y as f32),
                            Vec2::splat(self.config.stamp_size),
                        );
                        let style = ShapeStyle::Filled;
                        draw_shape(&mut self.buffer, kind, &bounds, style, self.color);
                        self.touch();
                    }
                    ShapeMode::Drag => {
                        self.state = EditorState::ShapeDragging {
                            kind,
                            start: (x, y),
                            end: (x, y),
                        };
                    }
                }
            }
            ToolType::Pen | ToolType::Eraser => {
                let color = self.stroke_color();
                self.checkpoint();
                let stroke = StrokePath::begin(
                    &mut self.buffer,
                    pixel_center(x, y),
                    self.config.stroke_width,
                    color,
                );
                self.state = EditorState::Painting { stroke };
                self.touch();
            }
        }

        log::debug!(
            "Pointer down at ({}, {}) with {} -> {}",
            x,
            y,
            self.tool,
            self.state.name()
        );
        Ok(())
    }

    /// Extends the current stroke or drag. Positions off the canvas are
    /// accepted and clipped when painted.
    pub fn pointer_move(&mut self, x: i32, y: i32) {
        match &mut self.state {
            EditorState::Painting { stroke } => {
                stroke.extend_to(&mut self.buffer, pixel_center(x, y));
                self.revision += 1;
            }
            EditorState::ShapeDragging { end, .. } => {
                *end = (x, y);
            }
            EditorState::Idle => {}
        }
    }

    pub fn pointer_up(&mut self) -> CanvasResult<()> {
        match std::mem::take(&mut self.state) {
            EditorState::Painting { stroke } => {
                log::debug!("Stroke finished with {} points", stroke.points().len());
            }
            EditorState::ShapeDragging { kind, start, end } => {
                self.checkpoint();
                let bounds = pixel_rect(start.0, start.1, end.0, end.1);
                let style = ShapeStyle::Outlined {
                    width: self.config.shape_stroke_width,
                };
                draw_shape(&mut self.buffer, kind, &bounds, style, self.color);
                self.touch();
            }
            EditorState::Idle => {}
        }
        Ok(())
    }

    /// The pointer left the canvas; ends any gesture like a release would
    pub fn pointer_leave(&mut self) -> CanvasResult<()> {
        self.pointer_up()
    }

    // --- canvas-wide actions ----------------------------------------------

    /// Resets the canvas to the background color
    pub fn clear(&mut self) -> CanvasResult<()> {
        self.pointer_up()?;
        self.checkpoint();
        self.buffer.clear();
        self.touch();
        log::info!("Canvas cleared");
        Ok(())
    }

    /// Paints the whole canvas in the current color
    pub fn fill_canvas(&mut self) -> CanvasResult<()> {
        self.pointer_up()?;
        self.checkpoint();
        self.buffer.fill(self.color.opaque());
        self.touch();
        log::info!("Canvas filled with {}", self.color);
        Ok(())
    }

    /// Restores the canvas to before the last edit. With nothing to undo
    /// the canvas is left alone and `EmptyHistory` is returned.
    pub fn undo(&mut self) -> CanvasResult<()> {
        self.pointer_up()?;
        let snapshot = self.history.undo().inspect_err(|err| log::warn!("{err}"))?;
        self.buffer.restore(&snapshot)?;
        self.touch();
        log::info!("Undo, {} steps left", self.history.len());
        Ok(())
    }

    /// The canvas as PNG bytes
    pub fn export(&self) -> CanvasResult<Vec<u8>> {
        let png = self.buffer.to_png()?;
        log::info!("Exported canvas as {} ({} bytes)", self.config.export_file_name, png.len());
        Ok(png)
    }

    /// Replaces the canvas with a PNG of the same size
    pub fn import(&mut self, png: &[u8]) -> CanvasResult<()> {
        let decoded = PixelBuffer::from_png(png, self.buffer.background())?;
        let snapshot = decoded.snapshot();
        if (decoded.width(), decoded.height()) != (self.buffer.width(), self.buffer.height()) {
            return Err(CanvasError::DimensionMismatch {
                expected: (self.buffer.width(), self.buffer.height()),
                actual: (decoded.width(), decoded.height()),
            });
        }

        self.pointer_up()?;
        self.checkpoint();
        self.buffer.restore(&snapshot)?;
        self.touch();
        log::info!("Imported {} byte image", png.len());
        Ok(())
    }

    // --- helpers ----------------------------------------------------------

    fn stroke_color(&self) -> Color {
        match self.tool {
            ToolType::Eraser => self.buffer.background(),
            _ => self.color,
        }
    }

    fn ensure_on_canvas(&self, x: i32, y: i32) -> CanvasResult<()> {
        if self.buffer.contains(x, y) {
            Ok(())
        } else {
            Err(CanvasError::OutOfBounds {
                x,
                y,
                width: self.buffer.width(),
                height: self.buffer.height(),
            })
        }
    }

    /// Saves the canvas for undo; called right before every edit
    fn checkpoint(&mut self) {
        self.history.push(&self.buffer);
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}
