//! Subscriber setup.

use super::exporter;
use super::file_writer::FileWriter;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name attached to exported spans.
const SERVICE_NAME: &str = "MiniStream";

/// Installs the global tracing subscriber.
///
/// Sets up a subscriber pipeline that:
/// 1. Filters spans and events by `config.trace_level` (default `"info"`)
/// 2. Prints events to stderr
/// 3. Exports closed spans as JSON lines to `config.log_file`, if set
///
/// # Initialization Behavior
///
/// - Creates the diagnostics file's directory if needed; if that fails the
///   file export is skipped and a warning is logged
/// - Idempotent: safe to call multiple times (only the first call takes effect)
///
/// # Example
///
/// ```rust
/// use ministream::observability::init_tracing;
/// use ministream::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let mut export_failure = None;
    let otel_layer = config.log_file.as_ref().and_then(|path| {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if let Err(e) = std::fs::create_dir_all(parent) {
                export_failure = Some((path.clone(), e));
                return None;
            }
        }
        let provider = exporter::create_tracer_provider(FileWriter::new(path.clone()), SERVICE_NAME);
        Some(OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME)))
    });

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(otel_layer);

    let _ = subscriber.try_init();

    if let Some((path, e)) = export_failure {
        tracing::warn!(path = %path.display(), error = %e, "span export disabled");
    }
}
