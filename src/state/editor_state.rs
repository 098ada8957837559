use crate::raster::{ShapeKind, StrokePath};

/// Pointer-interaction state of a drawing session.
///
/// ```text
///            pointer down (pen/eraser)
///   ┌──────┐ ─────────────────────────► ┌──────────┐
///   │      │ ◄───────────────────────── │ Painting │
///   │      │      pointer up / leave    └──────────┘
///   │ Idle │
///   │      │ ─────────────────────────► ┌───────────────┐
///   │      │ ◄───────────────────────── │ ShapeDragging │
///   └──────┘      pointer up / leave    └───────────────┘
///            pointer down (shape, drag mode)
/// ```
///
/// Fill and stamped shapes complete on pointer down and never leave `Idle`.
#[derive(Debug, Clone, Default)]
pub enum EditorState {
    /// No pointer interaction in progress
    #[default]
    Idle,
    /// A freehand stroke is being drawn
    Painting { stroke: StrokePath },
    /// A shape's bounding box is being dragged out
    ShapeDragging {
        kind: ShapeKind,
        start: (i32, i32),
        end: (i32, i32),
    },
}

impl EditorState {
    pub fn name(&self) -> &'static str {
        match self {
            EditorState::Idle => "Idle",
            EditorState::Painting { .. } => "Painting",
            EditorState::ShapeDragging { .. } => "ShapeDragging",
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, EditorState::Idle)
    }

    pub fn is_painting(&self) -> bool {
        matches!(self, EditorState::Painting { .. })
    }

    pub fn is_dragging_shape(&self) -> bool {
        matches!(self, EditorState::ShapeDragging { .. })
    }
}
