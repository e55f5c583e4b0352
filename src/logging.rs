use env_logger::{Builder, Env};

/// Logs go to stderr so stdout only carries the movie listing.
/// `RUST_LOG` overrides the default `info` level.
pub fn setup_logging() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();
}
