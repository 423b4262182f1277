//! Prometheus metrics for the scanner and HTTP surface.

use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};

pub struct Metrics {
    registry: Registry,
    pub scans_total: IntCounter,
    pub signals_total: IntCounterVec,
    pub scan_duration_seconds: Histogram,
    pub http_requests_total: IntCounter,
    pub http_requests_in_flight: IntGauge,
    pub http_request_duration_seconds: Histogram,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let scans_total = IntCounter::new("scans_total", "Symbol analyses performed")?;
        let signals_total = IntCounterVec::new(
            Opts::new("signals_total", "Signals emitted by direction"),
            &["direction"],
        )?;
        let scan_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "scan_duration_seconds",
            "Time spent analyzing one symbol",
        ))?;
        let http_requests_total =
            IntCounter::new("http_requests_total", "HTTP requests served")?;
        let http_requests_in_flight =
            IntGauge::new("http_requests_in_flight", "HTTP requests in flight")?;
        let http_request_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latency",
        ))?;

        registry.register(Box::new(scans_total.clone()))?;
        registry.register(Box::new(signals_total.clone()))?;
        registry.register(Box::new(scan_duration_seconds.clone()))?;
        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_requests_in_flight.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;

        Ok(Self {
            registry,
            scans_total,
            signals_total,
            scan_duration_seconds,
            http_requests_total,
            http_requests_in_flight,
            http_request_duration_seconds,
        })
    }

    /// Record one emitted signal by direction label.
    pub fn record_signal(&self, direction: &str) {
        self.signals_total.with_label_values(&[direction]).inc();
    }

    /// Export all registered series in the Prometheus text format.
    pub fn export(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}
