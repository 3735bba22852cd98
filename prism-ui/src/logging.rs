//! Tracing subscriber setup for applications and demos.
//!
//! Resolution and update passes log through `tracing`: `trace` per resolved
//! color, `debug` per committed leaf, `warn` for rejected configuration.

use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

/// Directives used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_DIRECTIVES: &str = "error,prism_ui=info,prism_components=info,example=info";

/// Installs a global subscriber filtered by `RUST_LOG`, or by
/// [`DEFAULT_DIRECTIVES`] when that is missing.
///
/// Calling this more than once is harmless.
pub fn init_tracing() {
    init_tracing_with(DEFAULT_DIRECTIVES);
}

/// Like [`init_tracing`], with caller-chosen fallback directives.
pub fn init_tracing_with(default_directives: &str) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(build_filter(rust_log.as_deref(), default_directives))
        .with_span_events(FmtSpan::CLOSE)
        .try_init();
}

fn build_filter(rust_log: Option<&str>, default_directives: &str) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_new(default_directives).ok())
        .unwrap_or_else(|| EnvFilter::new("error"))
}
