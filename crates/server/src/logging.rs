use std::io;

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the tracing subscriber.
/// - Respects `RUST_LOG` if set, defaults to info with request traces
/// - `LOG_FORMAT=json` switches to structured JSON output for containers
/// - Writes to stdout
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info,axum=info"));
    let json = std::env::var("LOG_FORMAT").map(|v| v == "json").unwrap_or(false);
    if json {
        let _ = fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .with_writer(io::stdout)
            .try_init();
    } else {
        let _ = fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .compact()
            .with_writer(io::stdout)
            .try_init();
    }
}
