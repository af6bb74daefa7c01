//! Compensating-action records and the LIFO undo log.

use std::path::PathBuf;

/// How to reverse one successful mutating command invocation.
///
/// Move and Remove list exactly the items that actually changed; a batch
/// where some items were skipped records only the successful subset, so a
/// reversal never touches an entry that was never moved.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum CompensatingAction {
    /// Reversed by deleting the copied destination.
    Copy {
        source: PathBuf,
        destination: PathBuf,
    },
    /// Reversed by moving each destination back to its original path.
    Move { moved: Vec<(PathBuf, PathBuf)> },
    /// Reversed by moving each trash entry back to its original path.
    Remove { removed: Vec<(PathBuf, PathBuf)> },
}

/// LIFO stack of compensating actions. One push per successful mutating
/// command, one pop per undo; only the most recent record is reversible.
#[derive(Debug, Default)]
pub struct UndoLog {
    actions: Vec<CompensatingAction>,
}

impl UndoLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: CompensatingAction) {
        self.actions.push(action);
    }

    /// Removes and returns the most recent record. Popping consumes the
    /// record permanently; there is no redo stack.
    pub fn pop(&mut self) -> Option<CompensatingAction> {
        self.actions.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn clear(&mut self) {
        self.actions.clear();
    }
}
