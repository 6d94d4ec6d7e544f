//! Logging initialization

/// Initialize the logging system
///
/// Logs go to stdout through `env_logger`, with a default filter level of
/// `info`. Override with the `RUST_LOG` environment variable. Calling this
/// more than once keeps the first logger.
///
/// # Example
/// ```
/// voxel_world::core::logging::init();
/// log::info!("Engine started");
/// ```
pub fn init() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .try_init();
}
