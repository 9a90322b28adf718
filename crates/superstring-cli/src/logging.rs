//! Logger setup shared by the binaries

/// Initialize env_logger from a `-v` count unless `quiet` is set
///
/// `RUST_LOG` takes precedence over the verbosity flag when present.
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
