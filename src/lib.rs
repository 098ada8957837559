#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color;
pub mod command;
pub mod config;
pub mod error;
pub mod file_handler;
pub mod fill;
pub mod geometry;
pub mod panels;
pub mod pixel_buffer;
pub mod raster;
pub mod session;
pub mod state;
pub mod tools;

pub use app::PaintApp;
pub use color::Color;
pub use command::{Command, CommandOutcome, UndoHistory};
pub use config::{SessionConfig, ShapeMode};
pub use error::{CanvasError, CanvasResult};
pub use fill::flood_fill;
pub use pixel_buffer::{PixelBuffer, Snapshot};
pub use raster::ShapeKind;
pub use session::DrawingSession;
pub use state::EditorState;
pub use tools::ToolType;
