//! Logging setup. Warnings must stay visible at the default level because
//! per-file copy and substitution failures are reported through them.

/// Initializes env_logger on stderr, Info by default and Debug with
/// `--verbose`. Timestamps are dropped so warnings read cleanly next to
/// the plain flow output on stdout.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .init();
}
