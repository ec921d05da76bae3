/// Installs a test-friendly `tracing` subscriber once per process.
///
/// Defaults to WARN, with `geomask=debug` unless `RUST_LOG` says otherwise.
pub(crate) fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("geomask=debug".parse().unwrap_or_default());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_test_writer()
        .try_init();
}
