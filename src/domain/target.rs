// Target resolution: which object the actor is pointing at.

use super::entities::{RayHit, Viewpoint};
use super::ports::Scene;

/// Reach of the tool in world units.
pub const DEFAULT_RAYCAST_DISTANCE: f64 = 10.0;

/// Casts a bounded ray from the viewpoint and returns the nearest hit.
///
/// A zero or non-finite forward vector resolves to nothing.
pub fn resolve<S: Scene + ?Sized>(
    scene: &S,
    viewpoint: Viewpoint,
    max_distance: f64,
) -> Option<RayHit> {
    let direction = viewpoint.forward.try_normalize()?;
    let hit = scene.raycast(viewpoint.origin, direction, max_distance)?;
    (hit.distance <= max_distance).then_some(hit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface_adapters::scene::InMemoryScene;
    use glam::DVec3;

    fn looking_down_z() -> Viewpoint {
        Viewpoint {
            origin: DVec3::ZERO,
            forward: DVec3::Z,
        }
    }

    #[test]
    fn when_object_is_in_range_then_it_is_returned() {
        let mut scene = InMemoryScene::new();
        let target = scene.add_box(DVec3::new(0.0, 0.0, 5.0), DVec3::splat(0.5), None);

        let hit = resolve(&scene, looking_down_z(), 10.0).expect("expected a hit");

        assert_eq!(hit.object, target);
        assert!((hit.distance - 4.5).abs() < 1e-9);
    }

    #[test]
    fn when_object_is_beyond_range_then_nothing_is_returned() {
        let mut scene = InMemoryScene::new();
        scene.add_box(DVec3::new(0.0, 0.0, 20.0), DVec3::splat(0.5), None);

        assert_eq!(resolve(&scene, looking_down_z(), 10.0), None);
    }

    #[test]
    fn when_forward_is_zero_then_nothing_is_returned() {
        let mut scene = InMemoryScene::new();
        scene.add_box(DVec3::ZERO, DVec3::splat(0.5), None);
        let viewpoint = Viewpoint {
            origin: DVec3::new(0.0, 0.0, -3.0),
            forward: DVec3::ZERO,
        };

        assert_eq!(resolve(&scene, viewpoint, 10.0), None);
    }

    #[test]
    fn when_forward_is_not_unit_length_then_distance_is_still_in_world_units() {
        let mut scene = InMemoryScene::new();
        scene.add_box(DVec3::new(0.0, 0.0, 5.0), DVec3::splat(0.5), None);
        let viewpoint = Viewpoint {
            origin: DVec3::ZERO,
            forward: DVec3::new(0.0, 0.0, 40.0),
        };

        let hit = resolve(&scene, viewpoint, 10.0).expect("expected a hit");
        assert!((hit.distance - 4.5).abs() < 1e-9);
    }
}
