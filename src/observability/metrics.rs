use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub store_reads_total: IntCounterVec,
    pub store_writes_total: IntCounterVec,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let store_reads_total = IntCounterVec::new(
            Opts::new("store_reads_total", "Store read operations by outcome"),
            &["collection", "outcome"],
        )
        .expect("valid store_reads_total metric");

        let store_writes_total = IntCounterVec::new(
            Opts::new("store_writes_total", "Store write operations by outcome"),
            &["collection", "outcome"],
        )
        .expect("valid store_writes_total metric");

        registry
            .register(Box::new(store_reads_total.clone()))
            .expect("register store_reads_total");
        registry
            .register(Box::new(store_writes_total.clone()))
            .expect("register store_writes_total");

        Self {
            registry,
            store_reads_total,
            store_writes_total,
        }
    }

    pub fn encode(&self) -> Result<String, String> {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();

        TextEncoder::new()
            .encode(&metric_families, &mut buffer)
            .map_err(|err| format!("failed to encode metrics: {err}"))?;

        String::from_utf8(buffer).map_err(|err| format!("metrics are not valid utf8: {err}"))
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
