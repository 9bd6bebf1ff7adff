//! Setup and initialization functions for CLI
//!
//! Logging and terminal color configuration, applied once at startup.

/// Default `env_logger` filter for a `-v` count. `RUST_LOG` takes precedence.
pub fn log_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn,stancemap=info",
        1 => "warn,stancemap=debug",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global logger. Calling it twice is harmless.
pub fn init_logging(verbosity: u8) {
    let env = env_logger::Env::default().default_filter_or(log_filter(verbosity));
    if let Err(e) = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_target(verbosity > 1)
        .try_init()
    {
        log::debug!("Logger already configured: {}", e);
    }
}

/// Turn off ANSI colors when asked to. `NO_COLOR` is honored by `colored` itself.
pub fn configure_color(plain: bool) {
    if plain {
        colored::control::set_override(false);
    }
}
