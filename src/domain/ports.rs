use glam::{DQuat, DVec3};

use crate::domain::entities::{ActorId, BuildTemplate, ObjectHandle, ObjectSnapshot, RayHit, Rgba};
use crate::domain::feedback::Hint;

// Port for the host scene: queries and object primitives the tool drives.
// Calls are synchronous and happen on the tool's event task.
pub trait Scene {
    /// Nearest object hit along `direction` (unit length) within `max_distance`.
    fn raycast(&self, origin: DVec3, direction: DVec3, max_distance: f64) -> Option<RayHit>;

    fn spawn(&mut self, template: &BuildTemplate, position: DVec3, rotation: DQuat)
    -> ObjectHandle;

    /// Removes the object, returning what is needed to restore it.
    fn destroy(&mut self, handle: ObjectHandle) -> Option<ObjectSnapshot>;

    /// Brings a destroyed object back; the handle may differ from the old one.
    fn restore(&mut self, snapshot: &ObjectSnapshot) -> ObjectHandle;

    fn position(&self, handle: ObjectHandle) -> Option<DVec3>;

    fn set_position(&mut self, handle: ObjectHandle, position: DVec3) -> bool;

    /// Current color, or `None` when the object has no paintable surface.
    fn color(&self, handle: ObjectHandle) -> Option<Rgba>;

    fn set_color(&mut self, handle: ObjectHandle, color: Rgba) -> bool;
}

// Port for granting and revoking the tool item.
pub trait Inventory {
    fn give_tool(&mut self, actor: ActorId);
    fn take_tool(&mut self, actor: ActorId);
}

// Port for the host permission system.
pub trait Permissions {
    fn has_permission(&self, actor: ActorId, node: &str) -> bool;
}

// Port for transient on-screen messages.
pub trait HintSink {
    fn show_hint(&mut self, actor: ActorId, hint: &Hint);
}
