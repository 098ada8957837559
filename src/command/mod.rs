mod commands;
mod history;

pub use commands::{Command, CommandOutcome};
pub use history::{DEFAULT_HISTORY_CAPACITY, UndoHistory};
