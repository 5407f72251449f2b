//! Observability adapters
//!
//! `ComputationObserver` implementations. `TracingObserver` is what the
//! server wires in; `NoopObserver` is for callers that want no output.

pub mod tracing_observer;

pub use tracing_observer::{NoopObserver, TracingObserver};
