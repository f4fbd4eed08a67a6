use super::config::DiagnosticsLevel;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the subscriber for the crate's own diagnostics.
///
/// Output goes to stderr so it never interleaves with records written to
/// stdout by a stream handler. `RUST_LOG` directives take precedence over
/// `level`; `RUST_LOG_FORMAT=json` switches to JSON lines.
pub fn init_tracing(level: DiagnosticsLevel) -> Result<(), tracing_subscriber::util::TryInitError> {
    let use_json = std::env::var("RUST_LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    let default_level: tracing::Level = level.into();
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    if use_json {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .compact()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .try_init()
    }
}
