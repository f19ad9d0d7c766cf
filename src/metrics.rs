//! Prometheus metrics for calculation and request tracking.
//!
//! This module provides metrics for:
//! - Calculations performed, by operation
//! - Calculation failures, by reason
//! - History reads
//! - HTTP request latency

use std::time::{Duration, Instant};

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::calculator::OperationKind;

// === Metric Name Constants ===

/// Successful calculations counter metric name.
pub const METRIC_CALCULATIONS: &str = "calculations_total";
/// Failed calculations counter metric name.
pub const METRIC_CALCULATION_FAILURES: &str = "calculation_failures_total";
/// History reads counter metric name.
pub const METRIC_HISTORY_REQUESTS: &str = "history_requests_total";
/// HTTP request latency metric name.
pub const METRIC_HTTP_REQUEST_LATENCY: &str = "http_request_latency_ms";

/// Install the global Prometheus recorder and register metric descriptions.
/// Call this once at startup.
pub fn install_prometheus() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    init_metrics();
    Ok(handle)
}

/// How often histogram buckets are drained between scrapes.
pub const UPKEEP_INTERVAL: Duration = Duration::from_secs(5);

/// Periodically run recorder upkeep.
///
/// `install_recorder` does not drain histograms on its own; without this
/// task they grow until the next scrape.
pub fn spawn_upkeep(handle: PrometheusHandle, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        loop {
            ticker.tick().await;
            handle.run_upkeep();
        }
    })
}

/// Initialize all metric descriptions.
pub fn init_metrics() {
    describe_counter!(
        METRIC_CALCULATIONS,
        "Total number of successful calculations"
    );
    describe_counter!(
        METRIC_CALCULATION_FAILURES,
        "Total number of rejected calculations"
    );
    describe_counter!(
        METRIC_HISTORY_REQUESTS,
        "Total number of history reads"
    );
    describe_histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "HTTP request latency in milliseconds"
    );

    debug!("Metrics initialized");
}

/// Increment successful calculations counter.
pub fn inc_calculations(kind: OperationKind) {
    counter!(METRIC_CALCULATIONS, "operation" => kind.as_str()).increment(1);
}

/// Increment failed calculations counter.
pub fn inc_calculation_failures(reason: &'static str) {
    counter!(METRIC_CALCULATION_FAILURES, "reason" => reason).increment(1);
}

/// Increment history reads counter.
pub fn inc_history_requests() {
    counter!(METRIC_HISTORY_REQUESTS).increment(1);
}

/// Record HTTP request latency.
pub fn record_http_latency(start: Instant, endpoint: &'static str) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_HTTP_REQUEST_LATENCY, "endpoint" => endpoint).record(latency_ms);
}

/// RAII guard for timing a request.
/// Records latency for its endpoint when dropped.
pub struct LatencyTimer {
    start: Instant,
    endpoint: &'static str,
}

impl LatencyTimer {
    /// Start timing a request to `endpoint`.
    pub fn new(endpoint: &'static str) -> Self {
        Self {
            start: Instant::now(),
            endpoint,
        }
    }

    /// Get elapsed time in milliseconds (without recording).
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for LatencyTimer {
    fn drop(&mut self) {
        record_http_latency(self.start, self.endpoint);
    }
}
