use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bandcode_core::{CapacitorBandCount, CapacitorType, ResistorBandCount};
use serde::Deserialize;

/// User defaults, read from `~/.bandcode/config.toml` or `--config`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub capacitor_bands: usize,
    pub resistor_bands: usize,
    pub capacitor_type: CapacitorType,
    pub export_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacitor_bands: 5,
            resistor_bands: 4,
            capacitor_type: CapacitorType::K,
            export_path: PathBuf::from("bandcode.csv"),
        }
    }
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config: {e}"))?;
        config.capacitor_band_count()?;
        config.resistor_band_count()?;
        Ok(config)
    }

    /// Load from an explicit path, which must exist, or from the default
    /// location, where a missing file means defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match default_config_path() {
                Some(path) if path.exists() => path,
                _ => {
                    log::debug!("No config file, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        log::debug!("Loading config from {}", path.display());
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml(&contents).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn capacitor_band_count(&self) -> Result<CapacitorBandCount> {
        Ok(CapacitorBandCount::try_from(self.capacitor_bands)?)
    }

    pub fn resistor_band_count(&self) -> Result<ResistorBandCount> {
        Ok(ResistorBandCount::try_from(self.resistor_bands)?)
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".bandcode").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(
            config.capacitor_band_count().unwrap(),
            CapacitorBandCount::Five
        );
        assert_eq!(config.resistor_band_count().unwrap(), ResistorBandCount::Four);
    }

    #[test]
    fn partial_overrides() {
        let config = Config::from_toml(
            r#"
            resistor_bands = 6
            capacitor_type = "M"
            "#,
        )
        .unwrap();
        assert_eq!(config.resistor_band_count().unwrap(), ResistorBandCount::Six);
        assert_eq!(config.capacitor_type, CapacitorType::M);
        assert_eq!(config.capacitor_bands, 5);
        assert_eq!(config.export_path, PathBuf::from("bandcode.csv"));
    }

    #[test]
    fn rejects_bad_band_count() {
        let err = Config::from_toml("capacitor_bands = 6").unwrap_err();
        assert!(
            err.to_string().contains("capacitor band count 6"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(Config::from_toml("colour = \"red\"").is_err());
    }

    #[test]
    fn explicit_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(Config::load(Some(&missing)).is_err());

        let path = dir.path().join("config.toml");
        fs::write(&path, "export_path = \"parts.csv\"\n").unwrap();
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.export_path, PathBuf::from("parts.csv"));
    }
}
