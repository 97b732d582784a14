// Single event task that owns the tool. All host events for the tool are
// funneled through one channel, so state changes never interleave.

use super::tool_gun::ToolGun;
use super::types::HostEvent;
use crate::domain::{HintSink, Inventory, Permissions, Scene};
use std::sync::Arc;
use tokio::sync::{Notify, mpsc};
use tracing::info;

pub async fn tool_task<S, H, P, I>(
    mut events_rx: mpsc::Receiver<HostEvent>,
    mut tool: ToolGun<S, H, P, I>,
    shutdown: Arc<Notify>,
) -> ToolGun<S, H, P, I>
where
    S: Scene,
    H: HintSink,
    P: Permissions,
    I: Inventory,
{
    if !tool.start() {
        // Closing the channel makes further sends fail instead of queueing.
        drop(events_rx);
        return tool;
    }

    loop {
        tokio::select! {
            _ = shutdown.notified() => {
                info!("tool task shutting down");
                break;
            }
            event = events_rx.recv() => {
                match event {
                    Some(event) => tool.handle(event),
                    // All senders dropped: the host went away.
                    None => break,
                }
            }
        }
    }

    tool.stop();
    tool
}
