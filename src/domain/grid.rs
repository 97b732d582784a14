// Grid snapping for placement and movement targets.

use super::errors::ConfigError;
use glam::DVec3;

/// Smallest accepted cell; finer lattices overflow when dividing coordinates.
pub const MIN_GRID_SIZE: f64 = f64::EPSILON;

/// Lattice cell size, validated finite and at least [`MIN_GRID_SIZE`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSize(f64);

impl GridSize {
    pub fn new(value: f64) -> Result<Self, ConfigError> {
        if value.is_finite() && value >= MIN_GRID_SIZE {
            Ok(Self(value))
        } else {
            Err(ConfigError::InvalidGridSize(value))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

/// Rounds each axis to the nearest multiple of `cell`.
///
/// Halfway values round to the even multiple, matching the host engine.
pub fn snap(position: DVec3, cell: GridSize) -> DVec3 {
    let size = cell.get();
    DVec3::new(
        snap_axis(position.x, size),
        snap_axis(position.y, size),
        snap_axis(position.z, size),
    )
}

fn snap_axis(value: f64, size: f64) -> f64 {
    let cells = value / size;
    if !cells.is_finite() {
        return value;
    }
    cells.round_ties_even() * size
}
