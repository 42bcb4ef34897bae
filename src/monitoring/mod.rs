/*!
 * Monitoring
 * Structured tracing for simulation runs
 */

mod tracer;

pub use tracer::{init_tracing, span_phase, PhaseSpan, TRACE_JSON_ENV};
