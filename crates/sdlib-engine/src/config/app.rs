use std::path::Path;

use serde::Deserialize;

use crate::paint::Color;

use super::{ConfigError, RendererFlags, WindowFlags};

/// Window, renderer and loop settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,

    /// Top-left window position; centered on the display when absent.
    pub position: Option<(i32, i32)>,

    pub min_size: (u32, u32),

    /// Largest allowed window size; the display bounds when absent.
    pub max_size: Option<(u32, u32)>,

    pub resizable: bool,
    pub fullscreen: bool,
    pub borderless: bool,
    pub maximized: bool,
    pub high_dpi: bool,

    pub accelerated: bool,
    pub vsync: bool,

    /// Frame cap. `None` or a non-positive value runs uncapped.
    pub max_framerate: Option<f64>,

    pub clear_color: Color,

    /// `env_logger` filter; falls back to `RUST_LOG`.
    pub log_filter: Option<String>,

    pub audio: AudioConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "sdlib".to_string(),
            width: 1280,
            height: 720,
            position: None,
            min_size: (0, 0),
            max_size: None,
            resizable: true,
            fullscreen: false,
            borderless: false,
            maximized: false,
            high_dpi: false,
            accelerated: true,
            vsync: true,
            max_framerate: Some(60.0),
            clear_color: Color::BLACK,
            log_filter: None,
            audio: AudioConfig::default(),
        }
    }
}

impl AppConfig {
    /// Reads and validates a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Validation(format!(
                "window size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }

        if let Some((max_w, max_h)) = self.max_size {
            let (min_w, min_h) = self.min_size;
            if min_w > max_w || min_h > max_h {
                return Err(ConfigError::Validation(format!(
                    "min size {min_w}x{min_h} exceeds max size {max_w}x{max_h}"
                )));
            }
        }

        if self.audio.frequency <= 0 || self.audio.channels <= 0 || self.audio.chunk_size <= 0 {
            return Err(ConfigError::Validation("audio parameters must be positive".into()));
        }

        Ok(())
    }

    pub fn window_flags(&self) -> WindowFlags {
        let mut flags = WindowFlags::SHOWN;
        flags.set(WindowFlags::RESIZABLE, self.resizable);
        flags.set(WindowFlags::FULLSCREEN, self.fullscreen);
        flags.set(WindowFlags::BORDERLESS, self.borderless);
        flags.set(WindowFlags::MAXIMIZED, self.maximized);
        flags.set(WindowFlags::ALLOW_HIGH_DPI, self.high_dpi);
        flags
    }

    pub fn renderer_flags(&self) -> RendererFlags {
        // Offscreen element areas need render targets regardless of the other flags.
        let mut flags = RendererFlags::TARGET_TEXTURE;
        if self.accelerated {
            flags |= RendererFlags::ACCELERATED;
        } else {
            flags |= RendererFlags::SOFTWARE;
        }
        flags.set(RendererFlags::PRESENT_VSYNC, self.vsync);
        flags
    }

    /// Effective frame cap, with non-positive values meaning "uncapped".
    pub fn frame_cap(&self) -> Option<f64> {
        self.max_framerate.filter(|fps| *fps > 0.0)
    }
}

/// Audio device settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Open the audio device at startup.
    pub enabled: bool,
    pub frequency: i32,
    pub channels: i32,
    pub chunk_size: i32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            frequency: 44_100,
            channels: 2,
            chunk_size: 1_024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── parsing ───────────────────────────────────────────────────────────

    #[test]
    fn empty_document_yields_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.frame_cap(), Some(60.0));
    }

    #[test]
    fn partial_document_overrides_fields() {
        let config = AppConfig::from_toml_str(
            r#"
            title = "Demo"
            width = 640
            height = 480
            position = [10, 20]
            max_framerate = -1.0
            clear_color = { r = 10, g = 20, b = 30 }

            [audio]
            frequency = 22050
            "#,
        )
        .unwrap();

        assert_eq!(config.title, "Demo");
        assert_eq!((config.width, config.height), (640, 480));
        assert_eq!(config.position, Some((10, 20)));
        assert_eq!(config.frame_cap(), None);
        assert_eq!(config.clear_color, Color::rgb(10, 20, 30));
        assert_eq!(config.audio.frequency, 22_050);
        assert_eq!(config.audio.channels, 2);
    }

    #[test]
    fn tiny_framerate_builds_an_unpaced_loop() {
        let config = AppConfig::from_toml_str("max_framerate = 1e-300").unwrap();
        assert_eq!(config.frame_cap(), Some(1e-300));
        assert!(crate::time::FramePacer::new(config.frame_cap()).budget().is_none());
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let err = AppConfig::from_toml_str("width = \"wide\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    // ── validation ────────────────────────────────────────────────────────

    #[test]
    fn zero_size_is_rejected() {
        let err = AppConfig::from_toml_str("width = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn min_larger_than_max_is_rejected() {
        let err = AppConfig::from_toml_str("min_size = [800, 600]\nmax_size = [640, 480]").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    // ── flags ─────────────────────────────────────────────────────────────

    #[test]
    fn flags_follow_toggles() {
        let config = AppConfig {
            resizable: false,
            borderless: true,
            accelerated: false,
            vsync: false,
            ..AppConfig::default()
        };

        let window = config.window_flags();
        assert!(window.contains(WindowFlags::SHOWN | WindowFlags::BORDERLESS));
        assert!(!window.contains(WindowFlags::RESIZABLE));

        let renderer = config.renderer_flags();
        assert!(renderer.contains(RendererFlags::SOFTWARE | RendererFlags::TARGET_TEXTURE));
        assert!(!renderer.intersects(RendererFlags::ACCELERATED | RendererFlags::PRESENT_VSYNC));
    }
}
