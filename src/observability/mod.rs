//! Tracing setup with optional file-based span export.
//!
//! Everything in the crate logs through `tracing`. This module installs the
//! subscriber: human-readable events go to stderr, and when a diagnostics file
//! is configured every closed span is also exported through OpenTelemetry as
//! one JSON line.
//!
//! # Architecture
//!
//! ```text
//! tracing → fmt layer → stderr
//!         → tracing-opentelemetry → OpenTelemetry SDK → JsonLineExporter → rotating file
//! ```
//!
//! # Configuration
//!
//! Trace level is controlled via the `trace_level` config option and defaults
//! to `"info"`. Any `EnvFilter` directive is accepted, e.g.
//! `ministream=debug`.
//!
//! # Usage
//!
//! ```rust
//! use ministream::observability::init_tracing;
//! use ministream::Config;
//!
//! let config = Config::default();
//! init_tracing(&config);
//!
//! tracing::debug!("shell initialized");
//! ```
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`exporter`]: OpenTelemetry span exporter writing JSON lines
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod exporter;
mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::init_tracing;
