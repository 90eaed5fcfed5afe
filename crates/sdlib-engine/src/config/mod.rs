//! Application configuration.
//!
//! `AppConfig` describes the window, renderer, frame pacing and audio device.
//! It deserializes from TOML; every field has a default, so an empty file is valid.

mod app;
mod flags;

pub use app::{AppConfig, AudioConfig};
pub use flags::{RendererFlags, WindowFlags};

/// Configuration errors.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Validation(String),
}
