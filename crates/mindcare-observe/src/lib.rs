//! Observability for MindCare: tracing subscriber and OpenTelemetry setup.

pub mod tracing_setup;
