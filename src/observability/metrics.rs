use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounterVec, IntGauge, Opts, Registry, TextEncoder,
};

use crate::error::AppError;

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub trip_requests_total: IntCounterVec,
    pub trip_transitions_total: IntCounterVec,
    pub registered_drivers: IntGauge,
    pub trip_fare: Histogram,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let trip_requests_total = IntCounterVec::new(
            Opts::new("trip_requests_total", "Trip requests by matching outcome"),
            &["outcome"],
        )
        .expect("valid trip_requests_total metric");

        let trip_transitions_total = IntCounterVec::new(
            Opts::new("trip_transitions_total", "Trip state transitions by target status"),
            &["status"],
        )
        .expect("valid trip_transitions_total metric");

        let registered_drivers =
            IntGauge::new("registered_drivers", "Number of drivers known to the dispatcher")
                .expect("valid registered_drivers metric");

        let trip_fare = Histogram::with_opts(
            HistogramOpts::new("trip_fare", "Fare quoted at assignment")
                .buckets(vec![5.0, 10.0, 25.0, 50.0, 100.0, 250.0, 500.0]),
        )
        .expect("valid trip_fare metric");

        registry
            .register(Box::new(trip_requests_total.clone()))
            .expect("register trip_requests_total");
        registry
            .register(Box::new(trip_transitions_total.clone()))
            .expect("register trip_transitions_total");
        registry
            .register(Box::new(registered_drivers.clone()))
            .expect("register registered_drivers");
        registry
            .register(Box::new(trip_fare.clone()))
            .expect("register trip_fare");

        Self {
            registry,
            trip_requests_total,
            trip_transitions_total,
            registered_drivers,
            trip_fare,
        }
    }

    pub fn encode(&self) -> Result<String, AppError> {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();

        TextEncoder::new()
            .encode(&metric_families, &mut buffer)
            .map_err(|err| AppError::Internal(format!("failed to encode metrics: {err}")))?;

        String::from_utf8(buffer)
            .map_err(|err| AppError::Internal(format!("metrics are not valid utf8: {err}")))
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Metrics;

    #[test]
    fn encodes_registered_families() {
        let metrics = Metrics::new();
        metrics
            .trip_requests_total
            .with_label_values(&["matched"])
            .inc();
        metrics.registered_drivers.set(3);

        let body = metrics.encode().expect("encode");
        assert!(body.contains("trip_requests_total{outcome=\"matched\"} 1"));
        assert!(body.contains("registered_drivers 3"));
    }

    #[test]
    fn instances_do_not_share_counters() {
        let a = Metrics::new();
        let b = Metrics::new();
        a.trip_transitions_total
            .with_label_values(&["completed"])
            .inc();

        assert_eq!(
            b.trip_transitions_total
                .with_label_values(&["completed"])
                .get(),
            0
        );
    }
}
