//! OpenTelemetry span exporter writing one JSON document per span.
//!
//! Each exported span becomes a single line:
//!
//! ```json
//! {"service":"MiniStream","name":"handle_event","traceId":"...","spanId":"...",
//!  "parentSpanId":"","start":"2024-05-01T10:00:00.000000Z","end":"...",
//!  "durationMicros":42,"attributes":{"event_type":"ToggleTheme"},
//!  "events":[{"name":"theme toggled","time":"...","attributes":{...}}],
//!  "status":"unset"}
//! ```

use super::file_writer::FileWriter;
use chrono::{DateTime, SecondsFormat, Utc};
use futures_util::future::BoxFuture;
use opentelemetry::trace::{SpanId, Status, TraceError};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use serde_json::{json, Map, Value as JsonValue};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::SystemTime;

/// Span exporter appending JSON lines to a rotating file.
pub struct JsonLineExporter {
    writer: FileWriter,
    service: String,
    is_shutdown: AtomicBool,
}

impl JsonLineExporter {
    pub fn new(writer: FileWriter, service: impl Into<String>) -> Self {
        Self {
            writer,
            service: service.into(),
            is_shutdown: AtomicBool::new(false),
        }
    }

    fn format_span(&self, span: &SpanData) -> JsonValue {
        let parent = if span.parent_span_id == SpanId::INVALID {
            String::new()
        } else {
            format!("{:016x}", span.parent_span_id)
        };
        let duration = span
            .end_time
            .duration_since(span.start_time)
            .unwrap_or_default()
            .as_micros();

        let events: Vec<JsonValue> = span
            .events
            .iter()
            .map(|event| {
                json!({
                    "name": event.name,
                    "time": timestamp(event.timestamp),
                    "attributes": attributes(&event.attributes),
                })
            })
            .collect();

        let status = match &span.status {
            Status::Unset => json!("unset"),
            Status::Ok => json!("ok"),
            Status::Error { description } => json!({ "error": description.to_string() }),
        };

        json!({
            "service": self.service,
            "name": span.name,
            "traceId": format!("{:032x}", span.span_context.trace_id()),
            "spanId": format!("{:016x}", span.span_context.span_id()),
            "parentSpanId": parent,
            "start": timestamp(span.start_time),
            "end": timestamp(span.end_time),
            "durationMicros": u64::try_from(duration).unwrap_or(u64::MAX),
            "attributes": attributes(&span.attributes),
            "events": events,
            "status": status,
        })
    }
}

fn timestamp(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn attributes(pairs: &[KeyValue]) -> JsonValue {
    let map: Map<String, JsonValue> = pairs
        .iter()
        .map(|kv| (kv.key.to_string(), attribute_value(&kv.value)))
        .collect();
    JsonValue::Object(map)
}

fn attribute_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => json!(b),
        Value::I64(i) => json!(i),
        Value::F64(f) => json!(f),
        Value::String(s) => json!(s.as_str()),
        Value::Array(_) => json!(value.to_string()),
    }
}

impl SpanExporter for JsonLineExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Box::pin(std::future::ready(Err(TraceError::from(
                "exporter is shut down",
            ))));
        }

        let result = batch.iter().try_for_each(|span| {
            self.writer
                .write_line(&self.format_span(span).to_string())
                .map_err(|e| TraceError::from(e.to_string()))
        });
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }
}

impl std::fmt::Debug for JsonLineExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonLineExporter")
            .field("writer", &self.writer)
            .field("service", &self.service)
            .field("is_shutdown", &self.is_shutdown)
            .finish()
    }
}

/// Creates a tracer provider exporting every span immediately to `writer`.
pub fn create_tracer_provider(writer: FileWriter, service: &str) -> TracerProvider {
    let resource = Resource::new(vec![KeyValue::new("service.name", service.to_string())]);
    let exporter = JsonLineExporter::new(writer, service);

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
