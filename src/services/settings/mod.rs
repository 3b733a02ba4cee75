//! Settings persistence: TOML file in the platform config directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::models::settings::Settings;

pub const SETTINGS_FILE: &str = "settings.toml";

/// Default settings file location, when the platform exposes one.
pub fn default_settings_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "KenBoyle", "RustAgenda")
        .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
}

/// Load settings, falling back to defaults when the file is missing or
/// unreadable. Never fatal.
pub fn load(path: &Path) -> Settings {
    if !path.exists() {
        return Settings::default();
    }

    let parsed = fs::read_to_string(path)
        .map_err(anyhow::Error::new)
        .and_then(|data| toml::from_str::<Settings>(&data).map_err(anyhow::Error::new));

    match parsed {
        Ok(settings) => {
            if let Err(err) = settings.validate() {
                log::warn!(
                    "settings at {} are invalid ({err}), using defaults",
                    path.display()
                );
                return Settings::default();
            }
            settings
        }
        Err(err) => {
            log::warn!(
                "could not load settings from {}, using defaults: {err}",
                path.display()
            );
            Settings::default()
        }
    }
}

/// Save settings, creating the config directory if needed.
pub fn save(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create config dir {}", parent.display()))?;
    }

    let data = toml::to_string_pretty(settings).context("failed to serialize settings")?;
    fs::write(path, data)
        .with_context(|| format!("failed to write settings to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn settings_round_trip_through_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config").join(SETTINGS_FILE);

        let settings = Settings {
            default_event_time: "07:30".to_string(),
            first_day_of_week: 0,
        };
        save(&path, &settings).unwrap();

        assert_eq!(load(&path), settings);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        assert_eq!(load(&path), Settings::default());
    }

    #[test]
    fn unreadable_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "default_event_time = [1, 2]").unwrap();

        assert_eq!(load(&path), Settings::default());
    }

    #[test]
    fn invalid_values_yield_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "default_event_time = \"late\"").unwrap();

        assert_eq!(load(&path), Settings::default());
    }
}
