// Per-actor tool state: mode cursor, mode-key edge and undo/redo history.

use super::entities::ActorId;
use super::history::{Direction, History, HistoryStep, Mutation, Reverted};
use super::mode::{EdgeDetector, Mode, ModeCycle};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Session {
    pub modes: ModeCycle,
    pub mode_key: EdgeDetector,
    pub history: History,
}

/// Owns every open session; actor ids are lookup keys only.
///
/// Calls for an actor without a session are no-ops.
#[derive(Debug)]
pub struct SessionRegistry {
    template: ModeCycle,
    history_limit: usize,
    sessions: HashMap<ActorId, Session>,
}

impl SessionRegistry {
    pub fn new(modes: ModeCycle, history_limit: usize) -> Self {
        Self {
            template: modes,
            history_limit,
            sessions: HashMap::new(),
        }
    }

    /// Opens an empty session; returns false if one was already open.
    pub fn open(&mut self, actor: ActorId) -> bool {
        match self.sessions.entry(actor) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(Session {
                    modes: self.template.clone(),
                    mode_key: EdgeDetector::default(),
                    history: History::new(self.history_limit),
                });
                true
            }
        }
    }

    /// Drops the actor's session without reverting anything.
    pub fn close(&mut self, actor: ActorId) -> bool {
        self.sessions.remove(&actor).is_some()
    }

    pub fn clear(&mut self) {
        self.sessions.clear();
    }

    pub fn is_open(&self, actor: ActorId) -> bool {
        self.sessions.contains_key(&actor)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn get_mut(&mut self, actor: ActorId) -> Option<&mut Session> {
        let session = self.sessions.get_mut(&actor);
        if session.is_none() {
            debug!(actor, "no open session");
        }
        session
    }

    pub fn current_mode(&self, actor: ActorId) -> Option<Mode> {
        self.sessions.get(&actor).map(|s| s.modes.current())
    }

    /// Records a fresh mutation for the actor.
    pub fn push_undo(&mut self, actor: ActorId, mutation: Mutation) {
        if let Some(session) = self.get_mut(actor) {
            session.history.record(mutation);
        }
    }

    /// Reverts the actor's latest change through `revert` and makes it
    /// redoable. `None` when the actor has no session.
    pub fn undo<F>(&mut self, actor: ActorId, revert: F) -> Option<HistoryStep>
    where
        F: FnOnce(Mutation) -> Option<Reverted>,
    {
        Some(self.get_mut(actor)?.history.step(Direction::Undo, revert))
    }

    pub fn redo<F>(&mut self, actor: ActorId, revert: F) -> Option<HistoryStep>
    where
        F: FnOnce(Mutation) -> Option<Reverted>,
    {
        Some(self.get_mut(actor)?.history.step(Direction::Redo, revert))
    }

    pub fn undo_len(&self, actor: ActorId) -> usize {
        self.sessions
            .get(&actor)
            .map_or(0, |s| s.history.undo_len())
    }

    pub fn redo_len(&self, actor: ActorId) -> usize {
        self.sessions
            .get(&actor)
            .map_or(0, |s| s.history.redo_len())
    }
}
