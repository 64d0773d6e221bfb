use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::model::Location;

/// Top-level configuration stored on disk.
///
/// Holds the browsable location list. The list is read once at startup and
/// treated as immutable for the lifetime of the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Example TOML:
    /// [[locations]]
    /// name = "San Jose"
    /// latitude = 37.335480
    /// longitude = -121.893028
    pub locations: Vec<Location>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locations: vec![
                Location::new("San Jose", 37.335480, -121.893028),
                Location::new("Dominican Republic", 18.7357, 70.1627),
                Location::new("Italy", 41.8719, 12.5674),
            ],
        }
    }
}

impl Config {
    /// Load config from disk, or return the built-in location list if no
    /// config file exists yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        if cfg.locations.is_empty() {
            return Err(anyhow!(
                "Config file {} contains no locations.\n\
                 Hint: delete the file to fall back to the built-in list.",
                path.display()
            ));
        }

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_three_locations() {
        let cfg = Config::default();

        assert_eq!(cfg.locations.len(), 3);
        assert_eq!(cfg.locations[0].name, "San Jose");
        assert_eq!(cfg.locations[1].name, "Dominican Republic");
        assert_eq!(cfg.locations[2].name, "Italy");
    }

    #[test]
    fn locations_roundtrip_through_toml() {
        let cfg = Config::default();

        let serialized = toml::to_string_pretty(&cfg).expect("serialization must succeed");
        let parsed: Config = toml::from_str(&serialized).expect("parsing must succeed");

        assert_eq!(parsed.locations, cfg.locations);
    }

    #[test]
    fn parses_locations_from_toml() {
        let toml = r#"
            [[locations]]
            name = "Reykjavik"
            latitude = 64.1466
            longitude = -21.9426
        "#;

        let cfg: Config = toml::from_str(toml).expect("parsing must succeed");

        assert_eq!(cfg.locations.len(), 1);
        assert_eq!(cfg.locations[0].name, "Reykjavik");
        assert!((cfg.locations[0].latitude - 64.1466).abs() < f64::EPSILON);
    }
}
