// In-memory scene adapter: axis-aligned boxes with ray queries.
// Used by the headless host and by tests in place of a real engine.

use crate::domain::{BuildTemplate, ObjectHandle, ObjectSnapshot, RayHit, Rgba, Scene};
use glam::{DQuat, DVec3};
use std::collections::BTreeMap;

/// A box-shaped object. `scale` is the full edge length per axis.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub template: Option<BuildTemplate>,
    pub position: DVec3,
    pub rotation: DQuat,
    pub scale: DVec3,
    /// `None` means the object has no paintable surface.
    pub color: Option<Rgba>,
}

impl SceneObject {
    fn half_extents(&self) -> DVec3 {
        self.scale.abs() * 0.5
    }

    fn snapshot(&self) -> ObjectSnapshot {
        ObjectSnapshot {
            template: self.template.clone(),
            position: self.position,
            rotation: self.rotation,
            scale: self.scale,
            color: self.color,
        }
    }
}

#[derive(Debug, Default)]
pub struct InMemoryScene {
    objects: BTreeMap<ObjectHandle, SceneObject>,
    next_id: u64,
}

impl InMemoryScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds static geometry (no template) centered at `position`.
    pub fn add_box(
        &mut self,
        position: DVec3,
        half_extents: DVec3,
        color: Option<Rgba>,
    ) -> ObjectHandle {
        self.insert(SceneObject {
            template: None,
            position,
            rotation: DQuat::IDENTITY,
            scale: half_extents * 2.0,
            color,
        })
    }

    pub fn object(&self, handle: ObjectHandle) -> Option<&SceneObject> {
        self.objects.get(&handle)
    }

    pub fn contains(&self, handle: ObjectHandle) -> bool {
        self.objects.contains_key(&handle)
    }

    /// First object whose center sits exactly at `position`.
    pub fn handle_at(&self, position: DVec3) -> Option<ObjectHandle> {
        self.objects
            .iter()
            .find(|(_, object)| object.position == position)
            .map(|(handle, _)| *handle)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    fn insert(&mut self, object: SceneObject) -> ObjectHandle {
        self.next_id += 1;
        let handle = ObjectHandle(self.next_id);
        self.objects.insert(handle, object);
        handle
    }
}

/// Entry distance of a ray into an axis-aligned box (slab test).
///
/// Boxes that contain the origin are not reported, like engine raycasts
/// that ignore colliders the ray starts inside.
fn ray_box_entry(origin: DVec3, direction: DVec3, min: DVec3, max: DVec3) -> Option<f64> {
    let mut t_enter = f64::NEG_INFINITY;
    let mut t_exit = f64::INFINITY;

    for axis in 0..3 {
        let (o, d) = (origin[axis], direction[axis]);
        let (lo, hi) = (min[axis], max[axis]);
        if d == 0.0 {
            if o < lo || o > hi {
                return None;
            }
            continue;
        }
        let t1 = (lo - o) / d;
        let t2 = (hi - o) / d;
        t_enter = t_enter.max(t1.min(t2));
        t_exit = t_exit.min(t1.max(t2));
    }

    (t_enter <= t_exit && t_enter >= 0.0).then_some(t_enter)
}

impl Scene for InMemoryScene {
    fn raycast(&self, origin: DVec3, direction: DVec3, max_distance: f64) -> Option<RayHit> {
        self.objects
            .iter()
            .filter_map(|(handle, object)| {
                let half = object.half_extents();
                let min = object.position - half;
                let max = object.position + half;
                let distance = ray_box_entry(origin, direction, min, max)?;
                (distance <= max_distance).then_some((*handle, distance))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(object, distance)| RayHit {
                point: origin + direction * distance,
                object,
                distance,
            })
    }

    fn spawn(
        &mut self,
        template: &BuildTemplate,
        position: DVec3,
        rotation: DQuat,
    ) -> ObjectHandle {
        // Templates are unit cubes with a paintable surface.
        self.insert(SceneObject {
            template: Some(template.clone()),
            position,
            rotation,
            scale: DVec3::ONE,
            color: Some(Rgba::WHITE),
        })
    }

    fn destroy(&mut self, handle: ObjectHandle) -> Option<ObjectSnapshot> {
        self.objects.remove(&handle).map(|object| object.snapshot())
    }

    fn restore(&mut self, snapshot: &ObjectSnapshot) -> ObjectHandle {
        self.insert(SceneObject {
            template: snapshot.template.clone(),
            position: snapshot.position,
            rotation: snapshot.rotation,
            scale: snapshot.scale,
            color: snapshot.color,
        })
    }

    fn position(&self, handle: ObjectHandle) -> Option<DVec3> {
        self.objects.get(&handle).map(|object| object.position)
    }

    fn set_position(&mut self, handle: ObjectHandle, position: DVec3) -> bool {
        match self.objects.get_mut(&handle) {
            Some(object) => {
                object.position = position;
                true
            }
            None => false,
        }
    }

    fn color(&self, handle: ObjectHandle) -> Option<Rgba> {
        self.objects.get(&handle).and_then(|object| object.color)
    }

    fn set_color(&mut self, handle: ObjectHandle, color: Rgba) -> bool {
        match self.objects.get_mut(&handle) {
            Some(SceneObject {
                color: Some(current),
                ..
            }) => {
                *current = color;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_two_boxes_line_up_then_nearest_is_hit() {
        let mut scene = InMemoryScene::new();
        let far = scene.add_box(DVec3::new(0.0, 0.0, 8.0), DVec3::splat(0.5), None);
        let near = scene.add_box(DVec3::new(0.0, 0.0, 3.0), DVec3::splat(0.5), None);

        let hit = scene
            .raycast(DVec3::ZERO, DVec3::Z, 10.0)
            .expect("expected a hit");

        assert_eq!(hit.object, near);
        assert_ne!(hit.object, far);
        assert_eq!(hit.point, DVec3::new(0.0, 0.0, 2.5));
    }

    #[test]
    fn when_ray_starts_inside_a_box_then_that_box_is_skipped() {
        let mut scene = InMemoryScene::new();
        scene.add_box(DVec3::ZERO, DVec3::splat(1.0), None);

        assert_eq!(scene.raycast(DVec3::ZERO, DVec3::X, 10.0), None);
    }

    #[test]
    fn when_ray_points_away_then_nothing_is_hit() {
        let mut scene = InMemoryScene::new();
        scene.add_box(DVec3::new(0.0, 0.0, 3.0), DVec3::splat(0.5), None);

        assert_eq!(scene.raycast(DVec3::ZERO, DVec3::NEG_Z, 10.0), None);
    }

    #[test]
    fn when_object_is_destroyed_and_restored_then_state_round_trips() {
        let mut scene = InMemoryScene::new();
        let handle = scene.spawn(
            &BuildTemplate("crate".to_string()),
            DVec3::new(1.0, 2.0, 3.0),
            DQuat::IDENTITY,
        );
        scene.set_color(handle, Rgba::RED);

        let snapshot = scene.destroy(handle).expect("snapshot");
        assert!(scene.is_empty());
        let restored = scene.restore(&snapshot);

        assert_ne!(restored, handle);
        assert_eq!(scene.position(restored), Some(DVec3::new(1.0, 2.0, 3.0)));
        assert_eq!(scene.color(restored), Some(Rgba::RED));
    }

    #[test]
    fn when_object_has_no_surface_then_set_color_fails() {
        let mut scene = InMemoryScene::new();
        let handle = scene.add_box(DVec3::ZERO, DVec3::ONE, None);

        assert!(!scene.set_color(handle, Rgba::RED));
        assert_eq!(scene.color(handle), None);
    }
}
