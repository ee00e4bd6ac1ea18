/// Initializes a tracing subscriber for logging, filtered by `RUST_LOG`.
pub fn subscriber() {
    let _ = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}
