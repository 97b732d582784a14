use crate::domain::{ActorId, Hint, HintSink};

// Headless hint sink: hints become structured log lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingHints;

impl HintSink for TracingHints {
    fn show_hint(&mut self, actor: ActorId, hint: &Hint) {
        tracing::info!(
            actor,
            text = %hint.text,
            duration_ms = hint.duration.as_millis() as u64,
            "hint"
        );
    }
}
