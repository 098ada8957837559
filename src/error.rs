use thiserror::Error;

/// Errors produced by the raster editing engine
#[derive(Debug, Error)]
pub enum CanvasError {
    /// Pixel access outside the buffer
    #[error("Pixel ({x}, {y}) is outside the {width}x{height} canvas")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },

    /// Snapshot or image does not match the live buffer size
    #[error("Dimension mismatch: expected {expected:?}, got {actual:?}")]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Undo requested with nothing to restore
    #[error("Nothing to undo")]
    EmptyHistory,

    #[error("Invalid color '{0}', expected #RRGGBB")]
    InvalidColor(String),

    #[error("Unknown tool '{0}'")]
    UnknownTool(String),

    #[error("Unknown shape '{0}'")]
    UnknownShape(String),

    /// Shape tool used before a shape was picked
    #[error("No shape selected")]
    NoShapeSelected,

    #[error("Invalid canvas dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to encode image: {0}")]
    Encode(String),

    #[error("Failed to decode image: {0}")]
    Decode(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl CanvasError {
    /// Errors the session reports but that leave the canvas usable
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::EmptyHistory
                | Self::InvalidColor(_)
                | Self::UnknownTool(_)
                | Self::UnknownShape(_)
                | Self::NoShapeSelected
        )
    }
}

/// Result type for canvas operations
pub type CanvasResult<T> = Result<T, CanvasError>;
