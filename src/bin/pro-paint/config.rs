//! User settings loaded from a RON file.

use pro_paint::brush::DEFAULT_BRUSH_SIZE;
use pro_paint::page::DEFAULT_EXTENT;
use pro_paint::{Color, ZoomSteps};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

const SETTINGS_FILE: &str = "settings.ron";
const APP_DIR: &str = "pro-paint";

/// Errors that can occur when loading settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse settings: {0}")]
    Parse(#[from] ron::de::SpannedError),
}

/// Startup settings. Missing fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub brush_size: f64,
    pub brush_color: Color,
    pub eraser_color: Color,
    /// Side length of a page's scrollable area at 100% zoom.
    pub canvas_extent: f64,
    pub zoom_in_factor: f64,
    pub zoom_out_factor: f64,
    /// Multiplier applied to wheel deltas when scrolling.
    pub scroll_speed: f64,
}

impl Default for Settings {
    fn default() -> Self {
        let steps = ZoomSteps::default();
        Self {
            brush_size: DEFAULT_BRUSH_SIZE,
            brush_color: Color::BLACK,
            eraser_color: Color::WHITE,
            canvas_extent: DEFAULT_EXTENT,
            zoom_in_factor: steps.zoom_in,
            zoom_out_factor: steps.zoom_out,
            scroll_speed: 1.0,
        }
    }
}

impl Settings {
    pub fn from_ron(source: &str) -> Result<Self, ConfigError> {
        let settings: Settings = ron::from_str(source)?;
        Ok(settings.sanitized())
    }

    /// Replaces out-of-range numeric values with their defaults.
    fn sanitized(mut self) -> Self {
        let defaults = Settings::default();
        if !(self.canvas_extent.is_finite() && self.canvas_extent > 0.0) {
            log::warn!(
                "canvas_extent {} must be positive, using {}",
                self.canvas_extent,
                defaults.canvas_extent
            );
            self.canvas_extent = defaults.canvas_extent;
        }
        if !(self.scroll_speed.is_finite() && self.scroll_speed > 0.0) {
            log::warn!(
                "scroll_speed {} must be positive, using {}",
                self.scroll_speed,
                defaults.scroll_speed
            );
            self.scroll_speed = defaults.scroll_speed;
        }
        self
    }

    pub fn zoom_steps(&self) -> ZoomSteps {
        ZoomSteps {
            zoom_in: self.zoom_in_factor,
            zoom_out: self.zoom_out_factor,
        }
    }
}

/// Default settings location, e.g. `~/.config/pro-paint/settings.ron`.
pub fn default_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join(APP_DIR).join(SETTINGS_FILE))
}

/// Reads settings from `path`. A missing file yields the defaults.
pub fn load(path: &Path) -> Result<Settings, ConfigError> {
    match fs::read_to_string(path) {
        Ok(source) => {
            log::info!("Loading settings from {}", path.display());
            Settings::from_ron(&source)
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            log::debug!("No settings at {}, using defaults", path.display());
            Ok(Settings::default())
        }
        Err(source) => Err(ConfigError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Loads settings from `explicit` or the default location, falling back to
/// defaults (with a warning) if anything goes wrong.
pub fn load_or_default(explicit: Option<&Path>) -> Settings {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_path() {
            Some(path) => path,
            None => return Settings::default(),
        },
    };

    load(&path).unwrap_or_else(|err| {
        log::warn!("{err}; using default settings");
        Settings::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_other_defaults() {
        let settings = Settings::from_ron(r##"(brush_size: 12.0, brush_color: "#ff0000")"##).unwrap();
        assert_eq!(settings.brush_size, 12.0);
        assert_eq!(settings.brush_color, Color::rgb(255, 0, 0));
        assert_eq!(settings.eraser_color, Color::WHITE);
        assert_eq!(settings.zoom_steps(), ZoomSteps::default());
    }

    #[test]
    fn pretty_output_reads_back() {
        let settings = Settings {
            canvas_extent: 2000.0,
            ..Settings::default()
        };
        let text = ron::ser::to_string_pretty(&settings, ron::ser::PrettyConfig::default()).unwrap();
        assert!(text.contains("\"#000000\""));
        assert_eq!(Settings::from_ron(&text).unwrap(), settings);
    }

    #[test]
    fn invalid_extent_and_scroll_speed_use_defaults() {
        let settings = Settings::from_ron("(canvas_extent: -1.0, scroll_speed: 0.0, brush_size: 8.0)").unwrap();
        assert_eq!(settings.canvas_extent, DEFAULT_EXTENT);
        assert_eq!(settings.scroll_speed, 1.0);
        assert_eq!(settings.brush_size, 8.0);
    }

    #[test]
    fn bad_color_is_a_parse_error() {
        let err = Settings::from_ron(r#"(brush_color: "red")"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("pro-paint-no-such-dir").join(SETTINGS_FILE);
        assert_eq!(load(&path).unwrap(), Settings::default());
    }
}
