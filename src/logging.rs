//! Process-wide logger setup.
//!
//! Console records are filtered at [`LoggingOptions::level`]; records from
//! the GPU and windowing crates ([`SYSTEM_TARGETS`]) use the separate, never
//! more verbose, [`LoggingOptions::system_level`]. A non-empty `RUST_LOG`
//! replaces both levels entirely.

use crate::{
    error::GengarError,
    options::{LoggingOptions, SYSTEM_TARGETS},
};

/// Build the `env_logger` configuration for `options` without installing
/// it.
///
/// # Errors
///
/// Returns [`GengarError::OptionsParse`] for an unknown level name.
pub fn builder(
    options: &LoggingOptions,
) -> Result<env_logger::Builder, GengarError> {
    let directives = std::env::var("RUST_LOG").ok();
    builder_with_directives(options, directives.as_deref())
}

fn builder_with_directives(
    options: &LoggingOptions,
    directives: Option<&str>,
) -> Result<env_logger::Builder, GengarError> {
    // levels are validated even when RUST_LOG overrides them
    let console = options.console_filter()?;
    let system = options.system_filter()?;

    let mut builder = env_logger::Builder::new();
    match directives.map(str::trim).filter(|d| !d.is_empty()) {
        Some(directives) => {
            let _ = builder.parse_filters(directives);
        }
        None => {
            let _ = builder.filter_level(console);
            for target in SYSTEM_TARGETS {
                let _ = builder.filter_module(target, system);
            }
        }
    }
    Ok(builder)
}

/// Install the global logger. Call once at startup.
///
/// # Errors
///
/// Returns [`GengarError::OptionsParse`] for an unknown level name and
/// [`GengarError::Logging`] if a logger is already installed.
pub fn init(options: &LoggingOptions) -> Result<(), GengarError> {
    builder(options)?
        .try_init()
        .map_err(|e| GengarError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use log::{Level, Log, Metadata};

    use super::*;

    fn enabled(
        logger: &env_logger::Logger,
        target: &str,
        level: Level,
    ) -> bool {
        let metadata = Metadata::builder().target(target).level(level).build();
        logger.enabled(&metadata)
    }

    #[test]
    fn system_targets_use_system_level() {
        let logger = builder_with_directives(&LoggingOptions::default(), None)
            .unwrap()
            .build();
        assert!(enabled(&logger, "gengar", Level::Info));
        assert!(!enabled(&logger, "gengar", Level::Debug));
        assert!(!enabled(&logger, "wgpu_core", Level::Info));
        assert!(enabled(&logger, "wgpu_core", Level::Warn));
        assert!(!enabled(&logger, "winit", Level::Info));
    }

    #[test]
    fn rust_log_directives_replace_configured_levels() {
        let logger =
            builder_with_directives(&LoggingOptions::default(), Some("trace"))
                .unwrap()
                .build();
        assert!(enabled(&logger, "gengar", Level::Trace));
        assert!(enabled(&logger, "wgpu_core", Level::Info));
        assert!(enabled(&logger, "naga", Level::Trace));
    }

    #[test]
    fn rust_log_per_crate_directives_are_honoured() {
        let logger = builder_with_directives(
            &LoggingOptions::default(),
            Some("error,wgpu_core=debug"),
        )
        .unwrap()
        .build();
        assert!(enabled(&logger, "wgpu_core", Level::Debug));
        assert!(!enabled(&logger, "gengar", Level::Warn));
    }

    #[test]
    fn blank_rust_log_keeps_configured_levels() {
        let logger =
            builder_with_directives(&LoggingOptions::default(), Some("  "))
                .unwrap()
                .build();
        assert!(enabled(&logger, "gengar", Level::Info));
        assert!(!enabled(&logger, "wgpu_core", Level::Info));
    }

    #[test]
    fn builder_rejects_unknown_level() {
        let options = LoggingOptions {
            system_level: "chatty".into(),
            ..LoggingOptions::default()
        };
        assert!(matches!(
            builder(&options),
            Err(GengarError::OptionsParse(_))
        ));
    }

    #[test]
    fn second_init_reports_error() {
        let options = LoggingOptions::default();
        // Another test in this binary may already have installed a logger;
        // either way the second call must fail.
        let _ = init(&options);
        assert!(matches!(init(&options), Err(GengarError::Logging(_))));
    }
}
