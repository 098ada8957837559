use std::collections::VecDeque;

use crate::error::{CanvasError, CanvasResult};
use crate::pixel_buffer::{PixelBuffer, Snapshot};

pub const DEFAULT_HISTORY_CAPACITY: usize = 20;

/// Bounded stack of canvas snapshots for undo.
///
/// Snapshots are stored oldest-first; pushing onto a full history drops the
/// oldest one. There is no redo: an undone snapshot is gone.
#[derive(Debug, Clone)]
pub struct UndoHistory {
    snapshots: VecDeque<Snapshot>,
    capacity: usize,
}

impl Default for UndoHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl UndoHistory {
    /// Creates an empty history holding at most `capacity` snapshots
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            snapshots: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Snapshot `buffer` and remember it, evicting the oldest entry at capacity
    pub fn push(&mut self, buffer: &PixelBuffer) {
        if self.snapshots.len() == self.capacity {
            self.snapshots.pop_front();
            log::debug!("Undo history full, dropped oldest snapshot");
        }
        self.snapshots.push_back(buffer.snapshot());
    }

    /// Removes and returns the most recent snapshot
    pub fn undo(&mut self) -> CanvasResult<Snapshot> {
        self.snapshots.pop_back().ok_or(CanvasError::EmptyHistory)
    }

    pub fn can_undo(&self) -> bool {
        !self.snapshots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
