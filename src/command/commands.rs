use serde::{Deserialize, Serialize};

use crate::error::CanvasResult;
use crate::session::DrawingSession;

/// Commands a UI sends to a drawing session.
///
/// Tool, color and shape arrive as the raw strings the UI produced and are
/// validated when executed, so a bad value is rejected at the boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    SetTool { name: String },
    SetColor { hex: String },
    SetShape { name: String },
    PointerDown { x: i32, y: i32 },
    PointerMove { x: i32, y: i32 },
    PointerUp,
    /// The pointer left the canvas
    PointerLeave,
    Undo,
    Clear,
    /// Paint the whole canvas in the current color
    FillCanvas,
    Export,
}

/// What executing a command produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Done,
    /// PNG bytes of the canvas
    Exported(Vec<u8>),
}

impl Command {
    /// Execute the command against the session
    pub fn execute(&self, session: &mut DrawingSession) -> CanvasResult<CommandOutcome> {
        match self {
            Command::SetTool { name } => session.set_tool(name)?,
            Command::SetColor { hex } => session.set_color(hex)?,
            Command::SetShape { name } => session.set_shape(name)?,
            Command::PointerDown { x, y } => session.pointer_down(*x, *y)?,
            Command::PointerMove { x, y } => session.pointer_move(*x, *y),
            Command::PointerUp => session.pointer_up()?,
            Command::PointerLeave => session.pointer_leave()?,
            Command::Undo => session.undo()?,
            Command::Clear => session.clear()?,
            Command::FillCanvas => session.fill_canvas()?,
            Command::Export => return Ok(CommandOutcome::Exported(session.export()?)),
        }
        Ok(CommandOutcome::Done)
    }

    /// True when a successful run should replace the UI's status line.
    /// Pointer moves arrive continuously during a stroke and leave it alone.
    pub fn resets_status(&self) -> bool {
        !matches!(self, Command::PointerMove { .. })
    }
}

impl DrawingSession {
    /// Runs a single UI command
    pub fn apply(&mut self, command: &Command) -> CanvasResult<CommandOutcome> {
        command.execute(self)
    }
}
