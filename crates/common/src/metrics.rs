use lazy_static::lazy_static;
use prometheus::{
    register_counter_vec, register_histogram_vec, CounterVec, Encoder, HistogramVec, TextEncoder,
};

lazy_static! {
    // Use case metrics
    pub static ref USE_CASE_COUNTER: CounterVec = register_counter_vec!(
        "companies_use_cases_total",
        "Total number of use case executions",
        &["use_case", "status"]
    )
    .expect("metric cannot be created");

    pub static ref USE_CASE_DURATION: HistogramVec = register_histogram_vec!(
        "companies_use_case_duration_seconds",
        "Use case execution duration in seconds",
        &["use_case"],
        vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]
    )
    .expect("metric cannot be created");

    // Error response metrics
    pub static ref ERROR_RESPONSE_COUNTER: CounterVec = register_counter_vec!(
        "companies_error_responses_total",
        "Total number of error responses by code and status",
        &["code", "status"]
    )
    .expect("metric cannot be created");

    // Rejected input metrics
    pub static ref REJECTED_INPUT_COUNTER: CounterVec = register_counter_vec!(
        "companies_rejected_inputs_total",
        "Total number of rejected field values by validation error name",
        &["field", "error"]
    )
    .expect("metric cannot be created");
}

/// Get all metrics in Prometheus text format
pub fn gather_metrics() -> Result<String, Box<dyn std::error::Error>> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

/// Record one use case execution
pub fn record_use_case(use_case: &str, success: bool, duration_secs: f64) {
    let status = if success { "success" } else { "error" };
    USE_CASE_COUNTER.with_label_values(&[use_case, status]).inc();
    USE_CASE_DURATION
        .with_label_values(&[use_case])
        .observe(duration_secs);
}

/// Record an error mapped to an HTTP response
pub fn record_error_response(code: &str, status: u16) {
    ERROR_RESPONSE_COUNTER
        .with_label_values(&[code, &status.to_string()])
        .inc();
}

/// Record a field value rejected by validation
pub fn record_rejected_input(field: &str, error: &str) {
    REJECTED_INPUT_COUNTER
        .with_label_values(&[field, error])
        .inc();
}
