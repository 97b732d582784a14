// ToolGun use case: routes host events through the permission guard into
// per-actor sessions, the target resolver and the mode executor.

use super::executor::{self, EffectOutcome};
use super::types::HostEvent;
use crate::domain::target;
use crate::domain::{
    ActorId, Direction, Hint, HintSink, HistoryStep, Inventory, Permissions, Scene,
    SessionRegistry, ToolSettings, Viewpoint,
};
use tracing::{debug, info};

/// The tool and the host ports it drives.
pub struct ToolGun<S, H, P, I> {
    pub scene: S,
    pub hints: H,
    pub permissions: P,
    pub inventory: I,
    settings: ToolSettings,
    sessions: SessionRegistry,
    running: bool,
}

impl<S, H, P, I> ToolGun<S, H, P, I>
where
    S: Scene,
    H: HintSink,
    P: Permissions,
    I: Inventory,
{
    pub fn new(settings: ToolSettings, scene: S, hints: H, permissions: P, inventory: I) -> Self {
        let sessions = SessionRegistry::new(settings.modes.clone(), settings.history_limit);
        Self {
            scene,
            hints,
            permissions,
            inventory,
            settings,
            sessions,
            running: false,
        }
    }

    /// Starts accepting events. Returns false when disabled in config.
    pub fn start(&mut self) -> bool {
        if !self.settings.enabled {
            info!("tool gun disabled in config");
            return false;
        }
        self.running = true;
        info!(modes = self.settings.modes.len(), "tool gun started");
        true
    }

    /// Stops accepting events and forgets every session.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        let open = self.sessions.len();
        self.sessions.clear();
        info!(open_sessions = open, "tool gun stopped");
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    pub fn sessions(&self) -> &SessionRegistry {
        &self.sessions
    }

    pub fn handle(&mut self, event: HostEvent) {
        if !self.running {
            debug!(?event, "tool gun not running; event ignored");
            return;
        }

        let actor = event.actor();
        if event.requires_permission()
            && !self
                .permissions
                .has_permission(actor, &self.settings.permission)
        {
            debug!(actor, "permission denied");
            return;
        }

        match event {
            HostEvent::Verified { actor } => self.on_verified(actor),
            HostEvent::Died { actor } | HostEvent::Left { actor } => self.on_released(actor),
            HostEvent::Fired {
                actor,
                viewpoint,
                mode_key_held,
            } => self.on_fired(actor, viewpoint, mode_key_held),
            HostEvent::UndoRequested { actor } => self.on_history(actor, Direction::Undo),
            HostEvent::RedoRequested { actor } => self.on_history(actor, Direction::Redo),
        }
    }

    fn on_verified(&mut self, actor: ActorId) {
        if !self.sessions.open(actor) {
            debug!(actor, "session already open");
            return;
        }
        self.inventory.give_tool(actor);
        self.hints.show_hint(actor, &Hint::welcome());
        info!(actor, "tool granted");
    }

    fn on_released(&mut self, actor: ActorId) {
        if self.sessions.close(actor) {
            self.inventory.take_tool(actor);
            info!(actor, "tool revoked");
        }
    }

    fn on_fired(&mut self, actor: ActorId, viewpoint: Option<Viewpoint>, mode_key_held: bool) {
        let Some(session) = self.sessions.get_mut(actor) else {
            return;
        };
        let Some(viewpoint) = viewpoint else {
            debug!(actor, "no viewpoint");
            return;
        };

        if session.mode_key.rising(mode_key_held) {
            let mode = session.modes.advance();
            self.hints.show_hint(actor, &Hint::mode_changed(mode));
            info!(actor, %mode, "mode changed");
        }
        let mode = session.modes.current();

        let Some(hit) = target::resolve(&self.scene, viewpoint, self.settings.raycast_distance)
        else {
            debug!(actor, %mode, "no target in range");
            return;
        };

        match executor::apply(&mut self.scene, &self.settings, mode, &hit) {
            EffectOutcome::Applied { mutation, hint } => {
                debug!(actor, %mode, handle = %mutation.handle(), "effect applied");
                self.sessions.push_undo(actor, mutation);
                self.hints.show_hint(actor, &hint);
            }
            EffectOutcome::Skipped(reason) => {
                debug!(actor, %mode, ?reason, object = %hit.object, "effect skipped");
            }
            EffectOutcome::Unimplemented(mode) => {
                debug!(actor, %mode, "mode has no effect");
            }
        }
    }

    fn on_history(&mut self, actor: ActorId, direction: Direction) {
        let scene = &mut self.scene;
        let step = match direction {
            Direction::Undo => self.sessions.undo(actor, |entry| executor::revert(scene, entry)),
            Direction::Redo => self.sessions.redo(actor, |entry| executor::revert(scene, entry)),
        };
        let Some(step) = step else {
            return;
        };

        let hint = match (step, direction) {
            (HistoryStep::Empty, Direction::Undo) => Hint::nothing_to_undo(),
            (HistoryStep::Empty, Direction::Redo) => Hint::nothing_to_redo(),
            (HistoryStep::Dropped(handle), _) => {
                // The object vanished outside this actor's history.
                debug!(actor, ?direction, %handle, "stale history entry dropped");
                Hint::change_discarded()
            }
            (HistoryStep::Applied(handle), Direction::Undo) => {
                info!(actor, ?direction, %handle, "history step applied");
                Hint::undone()
            }
            (HistoryStep::Applied(handle), Direction::Redo) => {
                info!(actor, ?direction, %handle, "history step applied");
                Hint::redone()
            }
        };
        self.hints.show_hint(actor, &hint);
    }
}
