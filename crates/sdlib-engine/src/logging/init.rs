use std::sync::Once;

use crate::config::AppConfig;

const DEFAULT_FILTER: &str = "info";

/// Logger setup: an `env_logger` filter string such as
/// `"info"` or `"sdlib_ui=debug,sdlib_sdl=info"`, plus ANSI coloring.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl LoggingConfig {
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self {
            env_filter: Some(filter.into()),
            ..Self::default()
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

/// Takes the `log_filter` of an application config.
impl From<&AppConfig> for LoggingConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            env_filter: config.log_filter.clone(),
            ..Self::default()
        }
    }
}

static INIT: Once = Once::new();

/// Installs the global logger on the first call; later calls do nothing.
///
/// The filter is the configured one, else `RUST_LOG`, else `info`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = resolve_filter(config.env_filter, std::env::var("RUST_LOG").ok());

        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&filter);
        builder.write_style(config.write_style);

        // A host binary may have installed its own logger first.
        if builder.try_init().is_err() {
            log::debug!("logger already installed; keeping it");
            return;
        }

        log::debug!("logging initialized with `{filter}`");
    });
}

fn resolve_filter(configured: Option<String>, env: Option<String>) -> String {
    let set = |f: &String| !f.trim().is_empty();
    configured
        .filter(set)
        .or(env.filter(set))
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_filter_wins_over_env() {
        let filter = resolve_filter(Some("debug".into()), Some("warn".into()));
        assert_eq!(filter, "debug");
    }

    #[test]
    fn env_then_default() {
        assert_eq!(resolve_filter(None, Some("sdlib_ui=trace".into())), "sdlib_ui=trace");
        assert_eq!(resolve_filter(None, None), "info");
        assert_eq!(resolve_filter(Some("  ".into()), None), "info");
        assert_eq!(resolve_filter(None, Some("".into())), "info");
    }

    #[test]
    fn blank_configured_filter_defers_to_env() {
        let filter = resolve_filter(Some(" \t".into()), Some("sdlib_sdl=debug".into()));
        assert_eq!(filter, "sdlib_sdl=debug");
    }

    #[test]
    fn app_config_supplies_the_filter() {
        let config = AppConfig {
            log_filter: Some("sdlib_sdl=debug".into()),
            ..AppConfig::default()
        };
        assert_eq!(LoggingConfig::from(&config).env_filter.as_deref(), Some("sdlib_sdl=debug"));
    }
}
