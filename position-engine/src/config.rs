use anyhow::{Context, Result};
use position_types::Corner;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::PositionError;
use crate::primary_screen::PrimaryScreenPositionProvider;
use crate::screen::{ScreenSource, SharedScreen};
use crate::tracking::TrackingPositionProvider;

const CONFIG_DIR_NAME: &str = "toast-position";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub placement: PlacementConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementConfig {
    #[serde(default = "default_corner")]
    pub corner: String,
    #[serde(default = "default_offset")]
    pub offset_x: f64,
    #[serde(default = "default_offset")]
    pub offset_y: f64,
}

fn default_corner() -> String { Corner::BottomRight.name().to_string() }
fn default_offset() -> f64 { 10.0 }

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            corner: default_corner(),
            offset_x: default_offset(),
            offset_y: default_offset(),
        }
    }
}

fn check_offset(axis: &'static str, value: f64) -> Result<f64, PositionError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(PositionError::InvalidOffset { axis, value })
    }
}

impl PlacementConfig {
    pub fn corner(&self) -> Result<Corner, PositionError> {
        Corner::from_name(&self.corner)
            .ok_or_else(|| PositionError::InvalidCornerName(self.corner.clone()))
    }

    /// Validated corner and offsets, ready to hand to a provider
    pub fn validated(&self) -> Result<(Corner, f64, f64), PositionError> {
        let corner = self.corner()?;
        let offset_x = check_offset("horizontal", self.offset_x)?;
        let offset_y = check_offset("vertical", self.offset_y)?;
        Ok((corner, offset_x, offset_y))
    }

    pub fn build<S: ScreenSource>(
        &self,
        screen: S,
    ) -> Result<PrimaryScreenPositionProvider<S>, PositionError> {
        let (corner, offset_x, offset_y) = self.validated()?;
        Ok(PrimaryScreenPositionProvider::new(corner, offset_x, offset_y, screen))
    }

    pub fn build_tracking(
        &self,
        screen: SharedScreen,
    ) -> Result<TrackingPositionProvider, PositionError> {
        let (corner, offset_x, offset_y) = self.validated()?;
        Ok(TrackingPositionProvider::new(corner, offset_x, offset_y, screen))
    }
}

/// Default location: `<config dir>/toast-position/config.toml`
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Expand a leading `~` in a user-supplied path
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

/// Read and parse a config file, reporting why it could not be used
pub fn read_config(path: &Path) -> Result<Config> {
    let config_str = fs::read_to_string(path)
        .with_context(|| format!("Could not read config file at {}", path.display()))?;

    toml::from_str::<Config>(&config_str)
        .with_context(|| format!("Failed to parse config at {}", path.display()))
}

/// Load config from `path`, or the default location when `None`.
///
/// Never fails: a missing or broken file falls back to defaults.
pub fn load_config(path: Option<&Path>) -> Config {
    let resolved = match path.map(Path::to_path_buf).or_else(config_path) {
        Some(p) => p,
        None => {
            warn!("No config directory available, using default config");
            return Config::default();
        }
    };

    match read_config(&resolved) {
        Ok(config) => {
            info!("Loaded placement config from {}", resolved.display());
            config
        }
        Err(e) => {
            warn!("{:#}, using defaults", e);
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::PositionProvider;
    use crate::screen::StaticScreen;
    use position_types::{Point, ScreenMetrics};
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.placement.corner, "bottom-right");
        assert_eq!(config.placement.offset_x, 10.0);
        assert_eq!(config.placement.offset_y, 10.0);
    }

    #[test]
    fn test_parse_partial_placement() {
        let config: Config = toml::from_str("[placement]\ncorner = \"top-center\"\n").unwrap();
        assert_eq!(config.placement.corner, "top-center");
        assert_eq!(config.placement.offset_x, 10.0);
    }

    #[test]
    fn test_parse_empty_file() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.placement, PlacementConfig::default());
    }

    #[test]
    fn test_unknown_corner_rejected() {
        let placement = PlacementConfig {
            corner: "middle".to_string(),
            ..Default::default()
        };
        assert_eq!(
            placement.corner(),
            Err(PositionError::InvalidCornerName("middle".to_string()))
        );
    }

    #[test]
    fn test_negative_offset_rejected() {
        let placement = PlacementConfig {
            offset_x: -5.0,
            ..Default::default()
        };
        let err = placement.validated().unwrap_err();
        assert_eq!(err, PositionError::InvalidOffset { axis: "horizontal", value: -5.0 });
    }

    #[test]
    fn test_infinite_offset_rejected() {
        let placement = PlacementConfig {
            offset_y: f64::INFINITY,
            ..Default::default()
        };
        assert!(matches!(
            placement.validated(),
            Err(PositionError::InvalidOffset { axis: "vertical", .. })
        ));
    }

    #[test]
    fn test_build_provider() {
        let placement = PlacementConfig {
            corner: "top_left".to_string(),
            offset_x: 5.0,
            offset_y: 6.0,
        };
        let provider = placement.build(StaticScreen(ScreenMetrics::full(800.0, 600.0))).unwrap();
        assert_eq!(provider.corner(), Corner::TopLeft);
        assert_eq!(provider.position(100.0, 50.0), Point::new(5.0, 6.0));
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[placement]\ncorner = \"bottom-left\"\noffset_x = 0.0\noffset_y = 24.0"
        )
        .unwrap();

        let config = load_config(Some(file.path()));
        assert_eq!(config.placement.corner, "bottom-left");
        assert_eq!(config.placement.offset_x, 0.0);
        assert_eq!(config.placement.offset_y, 24.0);
    }

    #[test]
    fn test_load_config_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(Some(&dir.path().join("absent.toml")));
        assert_eq!(config.placement, PlacementConfig::default());
    }

    #[test]
    fn test_load_config_broken_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[placement\ncorner = ").unwrap();

        assert!(read_config(file.path()).is_err());
        let config = load_config(Some(file.path()));
        assert_eq!(config.placement, PlacementConfig::default());
    }

    #[test]
    fn test_expand_path_keeps_plain_paths() {
        assert_eq!(expand_path("/etc/toast.toml"), PathBuf::from("/etc/toast.toml"));
    }
}
