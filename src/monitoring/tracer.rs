/*!
 * Tracing
 * Structured diagnostics for simulation runs using the tracing crate
 *
 * Diagnostics always go to stderr so they never interleave with the
 * report stream.
 */

use std::time::Instant;
use tracing::{debug, span, warn, Level};
use tracing_subscriber::{fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable that switches diagnostics to JSON
pub const TRACE_JSON_ENV: &str = "LANE_SCHED_TRACE_JSON";

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - LANE_SCHED_TRACE_JSON: Enable JSON output (default: false)
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var(TRACE_JSON_ENV)
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    let initialized = if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_current_span(true)
                    .with_span_list(true),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .try_init()
    };

    if initialized.is_ok() {
        debug!(json = use_json, "Structured tracing initialized");
    }
}

/// Timed span around one phase of a run (ingest, simulate, report)
pub struct PhaseSpan {
    span: tracing::Span,
    start: Instant,
    phase: &'static str,
}

impl PhaseSpan {
    pub fn new(phase: &'static str) -> Self {
        let span = span!(
            Level::DEBUG,
            "phase",
            phase = phase,
            duration_us = tracing::field::Empty,
            items = tracing::field::Empty,
        );
        Self {
            span,
            start: Instant::now(),
            phase,
        }
    }

    /// Record how many items (processes, events) the phase handled
    pub fn record_items(&self, count: usize) {
        self.span.record("items", count);
    }

    /// Enter the span context
    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self.span.enter()
    }
}

impl Drop for PhaseSpan {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        let _entered = self.span.enter();
        self.span.record("duration_us", duration.as_micros() as u64);

        if duration.as_millis() > 1000 {
            warn!(
                phase = self.phase,
                duration_ms = duration.as_millis() as u64,
                slow = true,
                "slow phase detected"
            );
        } else {
            debug!(
                phase = self.phase,
                duration_us = duration.as_micros() as u64,
                "phase completed"
            );
        }
    }
}

/// Create a phase span
pub fn span_phase(phase: &'static str) -> PhaseSpan {
    PhaseSpan::new(phase)
}
