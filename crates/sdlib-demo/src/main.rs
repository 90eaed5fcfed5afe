//! sdlib demo: two actor scenes under a small UI overlay.
//!
//! Usage: `sdlib-demo [config.toml]`. `Tab` or the "Switch" button changes
//! scenes, `Space` spawns or removes actors, `Escape` quits.

mod app;
mod scenes;

use anyhow::{Context, Result};
use sdlib_engine::config::AppConfig;
use sdlib_engine::logging::{LoggingConfig, init_logging};
use sdlib_sdl::Runtime;

use crate::app::Demo;

fn main() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::load(&path).with_context(|| format!("loading {path}"))?,
        None => AppConfig {
            title: "sdlib demo".to_string(),
            ..AppConfig::default()
        },
    };

    init_logging(LoggingConfig::from(&config));

    Runtime::run(config, Demo::new())
}
