use std::collections::HashSet;

use glam::DVec3;

use crate::domain::{ActorId, Hint, HintSink, Permissions, ToolConfig, ToolSettings, Viewpoint};
use crate::interface_adapters::inventory::InMemoryInventory;
use crate::interface_adapters::scene::InMemoryScene;
use crate::use_cases::tool_gun::ToolGun;

pub(crate) type TestTool =
    ToolGun<InMemoryScene, RecordingHints, StaticPermissions, InMemoryInventory>;

// Hint sink that keeps every message so tests can inspect feedback.
#[derive(Debug, Default)]
pub(crate) struct RecordingHints {
    shown: Vec<(ActorId, Hint)>,
}

impl RecordingHints {
    pub(crate) fn len(&self) -> usize {
        self.shown.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.shown.is_empty()
    }

    pub(crate) fn texts_for(&self, actor: ActorId) -> Vec<String> {
        self.shown
            .iter()
            .filter(|(to, _)| *to == actor)
            .map(|(_, hint)| hint.text.clone())
            .collect()
    }
}

impl HintSink for RecordingHints {
    fn show_hint(&mut self, actor: ActorId, hint: &Hint) {
        self.shown.push((actor, hint.clone()));
    }
}

// Permission source with a fixed answer per actor; `None` allows everyone.
pub(crate) struct StaticPermissions {
    allowed: Option<HashSet<ActorId>>,
}

impl StaticPermissions {
    pub(crate) fn all() -> Self {
        Self { allowed: None }
    }

    pub(crate) fn only(actors: &[ActorId]) -> Self {
        Self {
            allowed: Some(actors.iter().copied().collect()),
        }
    }
}

impl Permissions for StaticPermissions {
    fn has_permission(&self, actor: ActorId, _node: &str) -> bool {
        self.allowed
            .as_ref()
            .is_none_or(|allowed| allowed.contains(&actor))
    }
}

pub(crate) fn tool_with(
    config: ToolConfig,
    scene: InMemoryScene,
    permissions: StaticPermissions,
) -> TestTool {
    let settings = ToolSettings::try_from(config).expect("test config should validate");
    ToolGun::new(
        settings,
        scene,
        RecordingHints::default(),
        permissions,
        InMemoryInventory::default(),
    )
}

// Viewpoint at the origin looking towards `target`.
pub(crate) fn looking_at(target: DVec3) -> Viewpoint {
    Viewpoint {
        origin: DVec3::ZERO,
        forward: target,
    }
}
