//! Logging setup
//!
//! Builds tracing filter directives from the logging configuration and
//! installs the subscriber for the binary.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Builds a tracing filter string from the logging configuration.
///
/// Format: `base_level,finboard::component1=level1,...`.
pub fn build_filter_directives(config: &LoggingConfig) -> String {
    let mut filter = config.level.clone();
    if let Some(component_levels) = &config.component_levels {
        for (component, level) in component_levels {
            filter.push_str(&format!(",finboard::{}={}", component, level));
        }
    }
    filter
}

/// Installs the global tracing subscriber.
///
/// Falls back to `info` when the configured directives don't parse.
pub fn init(config: &LoggingConfig) {
    let filter = EnvFilter::try_new(build_filter_directives(config))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
