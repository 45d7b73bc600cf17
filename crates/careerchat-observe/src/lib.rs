//! Observability setup for careerchat: structured logging and optional
//! OpenTelemetry span export.

pub mod tracing_setup;
