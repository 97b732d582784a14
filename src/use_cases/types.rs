// Use-case level inputs delivered by the host.

use crate::domain::{ActorId, Viewpoint};

#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    /// Actor finished joining; grants the tool if permitted.
    Verified { actor: ActorId },
    Died { actor: ActorId },
    /// Actor disconnected.
    Left { actor: ActorId },
    /// Actor fired the tool. `viewpoint` is `None` when the host could not
    /// find the actor's camera; `mode_key_held` is the mode-key level.
    Fired {
        actor: ActorId,
        viewpoint: Option<Viewpoint>,
        mode_key_held: bool,
    },
    UndoRequested { actor: ActorId },
    RedoRequested { actor: ActorId },
}

impl HostEvent {
    pub fn actor(&self) -> ActorId {
        match self {
            HostEvent::Verified { actor }
            | HostEvent::Died { actor }
            | HostEvent::Left { actor }
            | HostEvent::Fired { actor, .. }
            | HostEvent::UndoRequested { actor }
            | HostEvent::RedoRequested { actor } => *actor,
        }
    }

    /// Events that grant or use the tool go through the permission check.
    /// Teardown always runs so state never outlives the actor.
    pub fn requires_permission(&self) -> bool {
        !matches!(self, HostEvent::Died { .. } | HostEvent::Left { .. })
    }
}
