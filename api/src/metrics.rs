use once_cell::sync::Lazy;
use prometheus::{
    opts, Encoder, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, IntGauge, Registry,
    TextEncoder,
};

macro_rules! counter_vec {
    ($name:expr, $help:expr, $labels:expr) => {
        Lazy::new(|| IntCounterVec::new(opts!($name, $help), $labels).unwrap())
    };
}
macro_rules! histogram_vec {
    ($name:expr, $help:expr, $labels:expr, $buckets:expr) => {
        Lazy::new(|| {
            HistogramVec::new(HistogramOpts::new($name, $help).buckets($buckets.to_vec()), $labels)
                .unwrap()
        })
    };
}
macro_rules! counter {
    ($name:expr, $help:expr) => {
        Lazy::new(|| IntCounter::new($name, $help).unwrap())
    };
}
macro_rules! gauge {
    ($name:expr, $help:expr) => {
        Lazy::new(|| IntGauge::new($name, $help).unwrap())
    };
}

const LATENCY_BUCKETS: [f64; 12] = [
    0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
];

/// Amounts in FCFA
const AMOUNT_BUCKETS: [f64; 8] = [
    1_000.0, 5_000.0, 10_000.0, 50_000.0, 100_000.0, 500_000.0, 1_000_000.0, 10_000_000.0,
];

// ── HTTP ────────────────────────────────────────────────────────────────────
pub static HTTP_REQUESTS_TOTAL: Lazy<IntCounterVec> =
    counter_vec!("http_requests_total", "Total HTTP requests", &["method", "path", "status"]);
pub static HTTP_REQUEST_DURATION: Lazy<HistogramVec> = histogram_vec!(
    "http_request_duration_seconds",
    "HTTP request latency",
    &["method", "path"],
    LATENCY_BUCKETS
);
pub static HTTP_IN_FLIGHT: Lazy<IntGauge> = gauge!("http_requests_in_flight", "In-flight HTTP requests");
pub static INTERNAL_ERRORS: Lazy<IntCounter> =
    counter!("internal_errors_total", "Requests answered with an internal error");

// ── Investments ─────────────────────────────────────────────────────────────
pub static INVESTMENTS_ACCEPTED: Lazy<IntCounter> =
    counter!("investments_accepted_total", "Investment submissions accepted");
pub static INVESTMENTS_REJECTED: Lazy<IntCounterVec> = counter_vec!(
    "investments_rejected_total",
    "Investment submissions rejected by validation",
    &["kind"]
);
pub static INVESTMENT_AMOUNT: Lazy<HistogramVec> = histogram_vec!(
    "investment_amount_fcfa",
    "Accepted investment amounts",
    &["network"],
    AMOUNT_BUCKETS
);
pub static ACKNOWLEDGMENTS_COMPLETED: Lazy<IntCounter> =
    counter!("investment_acknowledgments_total", "Deferred acknowledgments logged");

// ── Process ─────────────────────────────────────────────────────────────────
pub static PROCESS_START_TIME: Lazy<IntGauge> =
    gauge!("process_start_time_seconds", "Unix time the process started");

pub fn register_all(r: &Registry) -> prometheus::Result<()> {
    r.register(Box::new(HTTP_REQUESTS_TOTAL.clone()))?;
    r.register(Box::new(HTTP_REQUEST_DURATION.clone()))?;
    r.register(Box::new(HTTP_IN_FLIGHT.clone()))?;
    r.register(Box::new(INTERNAL_ERRORS.clone()))?;
    r.register(Box::new(INVESTMENTS_ACCEPTED.clone()))?;
    r.register(Box::new(INVESTMENTS_REJECTED.clone()))?;
    r.register(Box::new(INVESTMENT_AMOUNT.clone()))?;
    r.register(Box::new(ACKNOWLEDGMENTS_COMPLETED.clone()))?;
    r.register(Box::new(PROCESS_START_TIME.clone()))?;
    Ok(())
}

pub fn gather_metrics(r: &Registry) -> String {
    let encoder = TextEncoder::new();
    let families = r.gather();
    let mut buf = Vec::new();
    encoder.encode(&families, &mut buf).unwrap_or_default();
    String::from_utf8(buf).unwrap_or_default()
}

pub fn observe_http(method: &str, path: &str, status: u16, duration_secs: f64) {
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[method, path, &status.to_string()])
        .inc();
    HTTP_REQUEST_DURATION
        .with_label_values(&[method, path])
        .observe(duration_secs);
}

/// Mobile money carriers that get their own `network` label
const KNOWN_NETWORKS: [(&str, &str); 7] = [
    ("orange", "orange_money"),
    ("mtn", "mtn_momo"),
    ("moov", "moov_money"),
    ("wave", "wave"),
    ("airtel", "airtel_money"),
    ("free", "free_money"),
    ("mpesa", "mpesa"),
];

/// Label value for a client-supplied network name. Unknown names collapse
/// into `other` so the label set stays fixed.
pub fn network_label(network: &str) -> &'static str {
    let normalized: String = network
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    KNOWN_NETWORKS
        .iter()
        .find(|(prefix, _)| normalized.starts_with(*prefix))
        .map_or("other", |(_, label)| *label)
}

pub fn observe_investment(network: &str, amount: f64) {
    INVESTMENTS_ACCEPTED.inc();
    INVESTMENT_AMOUNT
        .with_label_values(&[network_label(network)])
        .observe(amount);
}

pub fn observe_rejection(kind: &str) {
    INVESTMENTS_REJECTED.with_label_values(&[kind]).inc();
}
