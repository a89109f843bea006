use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use std::time::Duration;

pub fn setup_metrics_recorder() -> PrometheusHandle {
    const EXPONENTIAL_SECONDS: &[f64] = &[
        0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
    ];

    PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("backend_fetch_duration_seconds".to_string()),
            EXPONENTIAL_SECONDS,
        )
        .unwrap()
        .install_recorder()
        .unwrap()
}

#[derive(Clone)]
pub struct Metrics {
    pub prometheus_handle: PrometheusHandle,
}

impl Metrics {
    pub fn new(prometheus_handle: PrometheusHandle) -> Self {
        Self { prometheus_handle }
    }
}

/// Records a poll tick that fetched and applied fresh data.
pub fn record_poll_success(endpoint: &'static str) {
    metrics::increment_counter!("dashboard_polls_total", "endpoint" => endpoint, "outcome" => "success");
}

/// Records a poll tick whose request failed. Failures are counted, never
/// retried.
pub fn record_poll_failure(endpoint: &'static str) {
    metrics::increment_counter!("dashboard_polls_total", "endpoint" => endpoint, "outcome" => "failure");
}

pub fn record_fetch_duration(endpoint: &'static str, duration: Duration) {
    metrics::histogram!("backend_fetch_duration_seconds", duration.as_secs_f64(), "endpoint" => endpoint);
}
