// Undo/redo records for scene mutations made through the tool.

use super::entities::{ObjectHandle, ObjectSnapshot, Rgba};
use glam::DVec3;
use std::collections::VecDeque;

/// Default cap on undo entries per actor.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// One reversible scene change, with the state needed to reverse it.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    /// The object was brought into the scene (built or restored).
    Created { handle: ObjectHandle },
    /// The object was removed; the snapshot brings it back.
    Removed {
        handle: ObjectHandle,
        snapshot: ObjectSnapshot,
    },
    Recolored {
        handle: ObjectHandle,
        before: Rgba,
        after: Rgba,
    },
    Moved {
        handle: ObjectHandle,
        from: DVec3,
        to: DVec3,
    },
}

impl Mutation {
    pub fn handle(&self) -> ObjectHandle {
        match self {
            Mutation::Created { handle }
            | Mutation::Removed { handle, .. }
            | Mutation::Recolored { handle, .. }
            | Mutation::Moved { handle, .. } => *handle,
        }
    }

    fn rebind(&mut self, old: ObjectHandle, new: ObjectHandle) {
        let handle = match self {
            Mutation::Created { handle }
            | Mutation::Removed { handle, .. }
            | Mutation::Recolored { handle, .. }
            | Mutation::Moved { handle, .. } => handle,
        };
        if *handle == old {
            *handle = new;
        }
    }
}

/// Side of the history a step consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Undo,
    Redo,
}

/// A reverted mutation: the record that re-applies it, and a handle change
/// if the scene handed back a different identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Reverted {
    pub inverse: Mutation,
    pub rebound: Option<(ObjectHandle, ObjectHandle)>,
}

/// What a single undo or redo step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryStep {
    /// Nothing recorded on that side.
    Empty,
    /// The object behind the entry is gone; the entry was discarded.
    Dropped(ObjectHandle),
    Applied(ObjectHandle),
}

/// Bounded undo stack plus redo stack.
///
/// Recording a fresh mutation clears the redo side. When the undo side is
/// full the oldest entry is dropped.
#[derive(Debug, Clone)]
pub struct History {
    undo: VecDeque<Mutation>,
    redo: Vec<Mutation>,
    limit: usize,
}

impl History {
    pub fn new(limit: usize) -> Self {
        Self {
            undo: VecDeque::new(),
            redo: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Records a new user action.
    pub fn record(&mut self, mutation: Mutation) {
        self.redo.clear();
        self.push_undo_entry(mutation);
    }

    /// Pops the latest entry from `direction`'s side, reverts it and moves
    /// the inverse to the opposite side.
    ///
    /// `revert` returns `None` when the entry can no longer be applied; the
    /// entry is then discarded and neither side gains a record.
    pub fn step<F>(&mut self, direction: Direction, revert: F) -> HistoryStep
    where
        F: FnOnce(Mutation) -> Option<Reverted>,
    {
        let entry = match direction {
            Direction::Undo => self.undo.pop_back(),
            Direction::Redo => self.redo.pop(),
        };
        let Some(entry) = entry else {
            return HistoryStep::Empty;
        };

        let handle = entry.handle();
        let Some(reverted) = revert(entry) else {
            return HistoryStep::Dropped(handle);
        };

        if let Some((old, new)) = reverted.rebound {
            self.rebind(old, new);
        }
        match direction {
            Direction::Undo => self.redo.push(reverted.inverse),
            Direction::Redo => self.push_undo_entry(reverted.inverse),
        }
        HistoryStep::Applied(handle)
    }

    fn push_undo_entry(&mut self, mutation: Mutation) {
        if self.undo.len() == self.limit {
            self.undo.pop_front();
        }
        self.undo.push_back(mutation);
    }

    /// Points every entry that referenced `old` at `new`.
    fn rebind(&mut self, old: ObjectHandle, new: ObjectHandle) {
        for entry in self.undo.iter_mut().chain(self.redo.iter_mut()) {
            entry.rebind(old, new);
        }
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}
