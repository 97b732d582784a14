// Core value types shared by the tool and its host ports.

use glam::{DQuat, DVec3};
use std::fmt;

/// Host-assigned identity of a player holding (or asking for) the tool.
pub type ActorId = u64;

/// Opaque reference to an object owned by the host scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectHandle(pub u64);

impl fmt::Display for ObjectHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Opaque reference to a spawnable template (prefab) known to the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BuildTemplate(pub String);

impl fmt::Display for BuildTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Linear RGBA color, each channel in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);
    pub const RED: Rgba = Rgba::new(1.0, 0.0, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Clamps every channel into 0.0..=1.0; NaN channels become 0.0.
    pub fn clamped(self) -> Self {
        let channel = |v: f32| if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) };
        Self::new(channel(self.r), channel(self.g), channel(self.b), channel(self.a))
    }
}

impl From<[f32; 4]> for Rgba {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self { r, g, b, a }
    }
}

/// Where an actor is looking from when the tool fires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewpoint {
    pub origin: DVec3,
    pub forward: DVec3,
}

/// Nearest intersection returned by a scene raycast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub point: DVec3,
    pub object: ObjectHandle,
    pub distance: f64,
}

/// Everything the scene needs to bring a removed object back.
///
/// Produced by the scene when an object is destroyed and handed back on
/// restore; the tool itself never looks inside.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectSnapshot {
    pub template: Option<BuildTemplate>,
    pub position: DVec3,
    pub rotation: DQuat,
    pub scale: DVec3,
    pub color: Option<Rgba>,
}
