use tracing::Level;

pub fn init_logging() {
    init_logging_with_level(Level::INFO);
}

/// Installs a stderr `fmt` subscriber; later calls are no-ops.
pub fn init_logging_with_level(level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();
}
