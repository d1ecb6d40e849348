// src/logging.rs
use log::LevelFilter;

/// Installs the global logger. `RUST_LOG`, when set, takes precedence over `level`.
pub fn init(level: LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).format_timestamp(None).parse_default_env();
    // A second call (e.g. from tests) keeps the first logger.
    let _ = builder.try_init();
}

/// Maps `-v`/`-q` to a level: warn by default, then info, debug, trace.
pub fn level_from_flags(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
