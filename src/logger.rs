/// Initialises `env_logger` for the process.
///
/// The level is `Info`, or `Debug` when `verbose` is set. A `RUST_LOG`
/// value in the environment takes precedence over both.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_target(false)
        .parse_default_env()
        .init();
}
