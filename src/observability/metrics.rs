use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};
use std::sync::{Arc, OnceLock};
use tracing::info;

static METRICS_INSTANCE: OnceLock<Arc<Metrics>> = OnceLock::new();

/// Process-wide metrics registry, created on first use.
pub fn get_metrics() -> &'static Arc<Metrics> {
    METRICS_INSTANCE.get_or_init(|| {
        info!("Initializing Metrics ...");
        Metrics::new()
    })
}

#[derive(Clone)]
pub struct Metrics {
    pub registry: Registry,

    // Token exchange metrics
    pub token_exchange_requests: IntCounter,
    pub token_exchange_failures: IntCounterVec,
    pub token_exchange_duration: HistogramVec,
    pub token_expiry_unix: IntGauge,

    // API metrics
    pub api_requests: IntCounterVec,
    pub api_failures: IntCounterVec,
    pub api_duration: HistogramVec,
}

impl Metrics {
    fn new() -> Arc<Self> {
        let registry = Registry::new_custom(Some("mapsclient".into()), None).expect("metrics registry");

        let metrics: Arc<Metrics> = Arc::new(Self {
            // Token
            token_exchange_requests: IntCounter::new("token_exchange_requests_total", "Total token exchange attempts").expect("metric"),
            token_exchange_failures: IntCounterVec::new(Opts::new("token_exchange_failures_total", "Token exchange failures by reason"), &["reason"]).expect("metric"),
            token_exchange_duration: HistogramVec::new(HistogramOpts::new("token_exchange_duration_seconds", "Token exchange duration seconds").buckets(vec![0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]), &["outcome"]).expect("metric"),
            token_expiry_unix: IntGauge::new("token_expiry_unix_seconds", "Expiry timestamp of the cached access token").expect("metric"),

            // API
            api_requests: IntCounterVec::new(Opts::new("api_requests_total", "Total API requests by operation"), &["operation"]).expect("metric"),
            api_failures: IntCounterVec::new(Opts::new("api_failures_total", "API failures by operation and reason"), &["operation", "reason"]).expect("metric"),
            api_duration: HistogramVec::new(HistogramOpts::new("api_request_duration_seconds", "API request duration seconds").buckets(vec![0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]), &["operation"]).expect("metric"),

            registry,
        });

        let reg = &metrics.registry;
        reg.register(Box::new(metrics.token_exchange_requests.clone())).expect("register");
        reg.register(Box::new(metrics.token_exchange_failures.clone())).expect("register");
        reg.register(Box::new(metrics.token_exchange_duration.clone())).expect("register");
        reg.register(Box::new(metrics.token_expiry_unix.clone())).expect("register");
        reg.register(Box::new(metrics.api_requests.clone())).expect("register");
        reg.register(Box::new(metrics.api_failures.clone())).expect("register");
        reg.register(Box::new(metrics.api_duration.clone())).expect("register");

        metrics
    }

    /// Render the registry in the text exposition format.
    pub fn render(&self) -> anyhow::Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}
