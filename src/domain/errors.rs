use std::fmt;

use super::grid::MIN_GRID_SIZE;

// Domain-level errors for loading tool settings.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidGridSize(f64),
    InvalidRaycastDistance(f64),
    EmptyModeList,
    UnknownMode(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidGridSize(value) => {
                write!(f, "grid_size must be at least {MIN_GRID_SIZE:e}, got {value}")
            }
            ConfigError::InvalidRaycastDistance(value) => {
                write!(f, "raycast_distance must be a positive number, got {value}")
            }
            ConfigError::EmptyModeList => f.write_str("modes must list at least one mode"),
            ConfigError::UnknownMode(name) => write!(
                f,
                "unknown mode {name:?} (expected Build, Destroy, Paint, Move, Rotate or Scale)"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
