use serde::de::DeserializeOwned;
use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use crate::domain::ToolConfig;

// Runtime/host constants (not tool tuning).

pub const EVENT_CHANNEL_CAPACITY: usize = 1024;

pub fn config_path() -> PathBuf {
    env::var("TOOLGUN_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config/toolgun.toml"))
}

// Comma separated actor ids granted the tool permission by the headless host.
pub fn admin_list() -> String {
    env::var("TOOLGUN_ADMINS").unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigOrigin {
    /// No file existed; defaults were written out.
    Created,
    Loaded,
}

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: ToolConfig,
    pub origin: ConfigOrigin,
    /// Keys whose values could not be read and kept their defaults.
    pub ignored: Vec<String>,
}

/// Reads the config file, writing a default one on first run.
pub fn load_or_create(path: &Path) -> io::Result<LoadedConfig> {
    if !path.exists() {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        let config = ToolConfig::default();
        let text = toml::to_string_pretty(&config).map_err(io::Error::other)?;
        fs::write(path, text)?;
        return Ok(LoadedConfig {
            config,
            origin: ConfigOrigin::Created,
            ignored: Vec::new(),
        });
    }

    let text = fs::read_to_string(path)?;
    let (config, ignored) = parse_lenient(&text);
    Ok(LoadedConfig {
        config,
        origin: ConfigOrigin::Loaded,
        ignored,
    })
}

/// Parses config text field by field. Values of the wrong shape keep their
/// defaults and are reported; unknown keys are skipped.
pub fn parse_lenient(text: &str) -> (ToolConfig, Vec<String>) {
    let mut config = ToolConfig::default();
    let mut ignored = Vec::new();

    let table: toml::Table = match toml::from_str(text) {
        Ok(table) => table,
        Err(_) => {
            ignored.push("<file>".to_string());
            return (config, ignored);
        }
    };

    for (key, value) in table {
        let applied = match key.as_str() {
            "enabled" => assign(&mut config.enabled, value),
            "debug" => assign(&mut config.debug, value),
            "modes" => assign(&mut config.modes, value),
            "build_template" => assign(&mut config.build_template, value),
            "paint_color" => assign(&mut config.paint_color, value),
            "grid_size" => assign(&mut config.grid_size, value),
            "raycast_distance" => assign(&mut config.raycast_distance, value),
            "move_lift" => assign(&mut config.move_lift, value),
            "history_limit" => assign(&mut config.history_limit, value),
            "permission" => assign(&mut config.permission, value),
            _ => true,
        };
        if !applied {
            ignored.push(key);
        }
    }

    (config, ignored)
}

fn assign<T: DeserializeOwned>(slot: &mut T, value: toml::Value) -> bool {
    match value.try_into::<T>() {
        Ok(parsed) => {
            *slot = parsed;
            true
        }
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        env::temp_dir()
            .join(format!("toolgun-config-{}-{name}", std::process::id()))
            .join("toolgun.toml")
    }

    #[test]
    fn when_file_is_missing_then_defaults_are_written() {
        let path = scratch_path("missing");
        let _ = fs::remove_file(&path);

        let loaded = load_or_create(&path).expect("first run should create config");

        assert_eq!(loaded.origin, ConfigOrigin::Created);
        assert_eq!(loaded.config, ToolConfig::default());
        let written = fs::read_to_string(&path).expect("config file written");
        assert_eq!(parse_lenient(&written).0, ToolConfig::default());

        let again = load_or_create(&path).expect("second run should load config");
        assert_eq!(again.origin, ConfigOrigin::Loaded);
        let _ = fs::remove_dir_all(path.parent().expect("parent dir"));
    }

    #[test]
    fn when_field_has_wrong_type_then_it_keeps_default_and_is_reported() {
        let (config, ignored) = parse_lenient(
            r#"
            grid_size = "big"
            debug = true
            modes = ["Build", "Destroy"]
            "#,
        );

        assert_eq!(config.grid_size, 1.0);
        assert!(config.debug);
        assert_eq!(config.modes, vec!["Build".to_string(), "Destroy".to_string()]);
        assert_eq!(ignored, vec!["grid_size".to_string()]);
    }

    #[test]
    fn when_unknown_keys_are_present_then_they_are_skipped() {
        let (config, ignored) = parse_lenient(
            r#"
            is_enabled = false
            build_template = "crate"
            paint_color = [0.0, 0.5, 1.0, 1.0]
            "#,
        );

        assert!(ignored.is_empty());
        assert!(config.enabled);
        assert_eq!(config.build_template.as_deref(), Some("crate"));
        assert_eq!(config.paint_color, [0.0, 0.5, 1.0, 1.0]);
    }

    #[test]
    fn when_file_is_not_toml_then_all_defaults_are_used() {
        let (config, ignored) = parse_lenient("this is = = not toml");
        assert_eq!(config, ToolConfig::default());
        assert_eq!(ignored, vec!["<file>".to_string()]);
    }

    #[test]
    fn when_grid_size_is_an_integer_then_it_still_parses() {
        let (config, ignored) = parse_lenient("grid_size = 2");
        assert!(ignored.is_empty());
        assert_eq!(config.grid_size, 2.0);
    }
}
