// Tool settings: the raw config shape and its validated form.

use super::entities::{BuildTemplate, Rgba};
use super::errors::ConfigError;
use super::grid::GridSize;
use super::history::DEFAULT_HISTORY_LIMIT;
use super::mode::{Mode, ModeCycle, parse_modes};
use super::target::DEFAULT_RAYCAST_DISTANCE;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PERMISSION: &str = "toolgun.admin";

/// Config values as written on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    pub enabled: bool,
    pub debug: bool,
    pub modes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_template: Option<String>,
    pub paint_color: [f32; 4],
    pub grid_size: f64,
    pub raycast_distance: f64,
    pub move_lift: f64,
    pub history_limit: usize,
    pub permission: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            debug: false,
            modes: Mode::ALL.iter().map(|m| m.name().to_string()).collect(),
            build_template: None,
            paint_color: Rgba::RED.to_array(),
            grid_size: 1.0,
            raycast_distance: DEFAULT_RAYCAST_DISTANCE,
            move_lift: 1.0,
            history_limit: DEFAULT_HISTORY_LIMIT,
            permission: DEFAULT_PERMISSION.to_string(),
        }
    }
}

/// Validated settings, immutable once the tool is running.
#[derive(Debug, Clone)]
pub struct ToolSettings {
    pub enabled: bool,
    pub debug: bool,
    pub modes: ModeCycle,
    pub build_template: Option<BuildTemplate>,
    pub paint_color: Rgba,
    pub grid: GridSize,
    pub raycast_distance: f64,
    /// Upward offset applied to the hit point before snapping a moved object.
    pub move_lift: f64,
    pub history_limit: usize,
    pub permission: String,
}

impl TryFrom<ToolConfig> for ToolSettings {
    type Error = ConfigError;

    fn try_from(config: ToolConfig) -> Result<Self, Self::Error> {
        let grid = GridSize::new(config.grid_size)?;
        if !(config.raycast_distance.is_finite() && config.raycast_distance > 0.0) {
            return Err(ConfigError::InvalidRaycastDistance(config.raycast_distance));
        }
        let modes = ModeCycle::new(parse_modes(&config.modes)?).ok_or(ConfigError::EmptyModeList)?;
        let build_template = config
            .build_template
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .map(BuildTemplate);
        let move_lift = if config.move_lift.is_finite() {
            config.move_lift
        } else {
            1.0
        };

        Ok(Self {
            enabled: config.enabled,
            debug: config.debug,
            modes,
            build_template,
            paint_color: Rgba::from(config.paint_color).clamped(),
            grid,
            raycast_distance: config.raycast_distance,
            move_lift,
            history_limit: config.history_limit.max(1),
            permission: config.permission,
        })
    }
}
