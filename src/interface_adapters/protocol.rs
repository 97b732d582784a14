// Wire DTOs for host messages fed to the headless tool host.

use crate::domain::{ActorId, Viewpoint};
use crate::use_cases::HostEvent;
use glam::DVec3;
use serde::Deserialize;

/// Messages the host sends, one JSON object per line.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum HostMessage {
    Verified(ActorPayload),
    Died(ActorPayload),
    Left(ActorPayload),
    Fired(FiredPayload),
    Undo(ActorPayload),
    Redo(ActorPayload),
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActorPayload {
    pub actor: ActorId,
}

/// Fire payload; the viewpoint is absent when the host has no camera.
#[derive(Debug, Clone, Deserialize)]
pub struct FiredPayload {
    pub actor: ActorId,
    #[serde(default)]
    pub origin: Option<[f64; 3]>,
    #[serde(default)]
    pub forward: Option<[f64; 3]>,
    #[serde(default)]
    pub mode_key: bool,
}

impl From<HostMessage> for HostEvent {
    fn from(message: HostMessage) -> Self {
        match message {
            HostMessage::Verified(p) => HostEvent::Verified { actor: p.actor },
            HostMessage::Died(p) => HostEvent::Died { actor: p.actor },
            HostMessage::Left(p) => HostEvent::Left { actor: p.actor },
            HostMessage::Fired(p) => HostEvent::Fired {
                actor: p.actor,
                viewpoint: p.origin.zip(p.forward).map(|(origin, forward)| Viewpoint {
                    origin: DVec3::from_array(origin),
                    forward: DVec3::from_array(forward),
                }),
                mode_key_held: p.mode_key,
            },
            HostMessage::Undo(p) => HostEvent::UndoRequested { actor: p.actor },
            HostMessage::Redo(p) => HostEvent::RedoRequested { actor: p.actor },
        }
    }
}

/// Decodes one input line; blank lines yield `Ok(None)`.
pub fn decode_line(line: &str) -> Result<Option<HostEvent>, serde_json::Error> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let message: HostMessage = serde_json::from_str(line)?;
    Ok(Some(message.into()))
}
