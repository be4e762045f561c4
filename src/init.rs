use env_logger::Env;

/// Diagnostics go to stderr; `RUST_LOG` overrides the default `warn` level.
pub fn init() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .try_init();
}
