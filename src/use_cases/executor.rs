// Mode effects and their inverses.

use crate::domain::{
    Hint, Mode, Mutation, ObjectHandle, RayHit, Reverted, Scene, ToolSettings, snap,
};
use glam::{DQuat, DVec3};

/// Result of applying one mode to a resolved target.
#[derive(Debug, Clone, PartialEq)]
pub enum EffectOutcome {
    Applied { mutation: Mutation, hint: Hint },
    Skipped(SkipReason),
    /// The mode has no effect yet.
    Unimplemented(Mode),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NoBuildTemplate,
    NotPaintable,
    TargetGone,
}

pub fn apply<S: Scene + ?Sized>(
    scene: &mut S,
    settings: &ToolSettings,
    mode: Mode,
    hit: &RayHit,
) -> EffectOutcome {
    match mode {
        Mode::Build => build(scene, settings, hit),
        Mode::Destroy => destroy(scene, hit.object),
        Mode::Paint => paint(scene, settings, hit.object),
        Mode::Move => move_to(scene, settings, hit),
        Mode::Rotate | Mode::Scale => EffectOutcome::Unimplemented(mode),
    }
}

fn build<S: Scene + ?Sized>(scene: &mut S, settings: &ToolSettings, hit: &RayHit) -> EffectOutcome {
    let Some(template) = settings.build_template.as_ref() else {
        return EffectOutcome::Skipped(SkipReason::NoBuildTemplate);
    };
    // No lift here; only Move raises the target point.
    let position = snap(hit.point, settings.grid);
    let handle = scene.spawn(template, position, DQuat::IDENTITY);
    EffectOutcome::Applied {
        mutation: Mutation::Created { handle },
        hint: Hint::built(),
    }
}

fn destroy<S: Scene + ?Sized>(scene: &mut S, handle: ObjectHandle) -> EffectOutcome {
    match scene.destroy(handle) {
        Some(snapshot) => EffectOutcome::Applied {
            mutation: Mutation::Removed { handle, snapshot },
            hint: Hint::destroyed(),
        },
        None => EffectOutcome::Skipped(SkipReason::TargetGone),
    }
}

fn paint<S: Scene + ?Sized>(
    scene: &mut S,
    settings: &ToolSettings,
    handle: ObjectHandle,
) -> EffectOutcome {
    let Some(before) = scene.color(handle) else {
        return EffectOutcome::Skipped(SkipReason::NotPaintable);
    };
    let after = settings.paint_color;
    if !scene.set_color(handle, after) {
        return EffectOutcome::Skipped(SkipReason::NotPaintable);
    }
    EffectOutcome::Applied {
        mutation: Mutation::Recolored {
            handle,
            before,
            after,
        },
        hint: Hint::painted(),
    }
}

fn move_to<S: Scene + ?Sized>(
    scene: &mut S,
    settings: &ToolSettings,
    hit: &RayHit,
) -> EffectOutcome {
    let handle = hit.object;
    let Some(from) = scene.position(handle) else {
        return EffectOutcome::Skipped(SkipReason::TargetGone);
    };
    // Lift before snapping so the object does not sink into the surface.
    let to = snap(hit.point + DVec3::Y * settings.move_lift, settings.grid);
    if !scene.set_position(handle, to) {
        return EffectOutcome::Skipped(SkipReason::TargetGone);
    }
    EffectOutcome::Applied {
        mutation: Mutation::Moved { handle, from, to },
        hint: Hint::moved(),
    }
}

/// Reverses a recorded mutation through the scene.
///
/// Returns `None` when the scene no longer has the object; the caller drops
/// the record.
pub fn revert<S: Scene + ?Sized>(scene: &mut S, mutation: Mutation) -> Option<Reverted> {
    match mutation {
        Mutation::Created { handle } => {
            let snapshot = scene.destroy(handle)?;
            Some(Reverted {
                inverse: Mutation::Removed { handle, snapshot },
                rebound: None,
            })
        }
        Mutation::Removed { handle, snapshot } => {
            let restored = scene.restore(&snapshot);
            Some(Reverted {
                inverse: Mutation::Created { handle: restored },
                rebound: (restored != handle).then_some((handle, restored)),
            })
        }
        Mutation::Recolored {
            handle,
            before,
            after,
        } => scene.set_color(handle, before).then_some(Reverted {
            inverse: Mutation::Recolored {
                handle,
                before: after,
                after: before,
            },
            rebound: None,
        }),
        Mutation::Moved { handle, from, to } => {
            scene.set_position(handle, from).then_some(Reverted {
                inverse: Mutation::Moved {
                    handle,
                    from: to,
                    to: from,
                },
                rebound: None,
            })
        }
    }
}
