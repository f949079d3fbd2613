use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber. Call once from the embedding
/// application; library code only emits events.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}
