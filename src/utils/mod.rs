use std::sync::Once;

static TRACING_INIT: Once = Once::new();

type InstallError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Installs the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over the default `vroong=info` filter. A
/// subscriber installed elsewhere is kept and reported.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        if let Err(err) = install_subscriber() {
            tracing::warn!("keeping existing tracing subscriber: {err}");
        }
    });
}

fn install_subscriber() -> Result<(), InstallError> {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vroong=info"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
}
