// Diagnostics service - Use case for evaluating sensor readings
use crate::domain::diagnostics::{classify, DiagnosticStatus, SensorReading};
use crate::domain::telemetry::TelemetrySeries;
use crate::domain::vehicle::VehicleDomain;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticsReport {
    pub reading: SensorReading,
    pub status: DiagnosticStatus,
    pub series: TelemetrySeries,
}

#[derive(Clone, Default)]
pub struct DiagnosticsService;

impl DiagnosticsService {
    pub fn new() -> Self {
        Self
    }

    /// Clamp the raw slider values into the domain's sensor ranges, classify
    /// the reading and synthesize a fresh telemetry series for display.
    pub fn evaluate(&self, domain: VehicleDomain, value_1: f64, value_2: f64) -> DiagnosticsReport {
        let profile = domain.sensor_profile();
        let reading = SensorReading::new(
            profile.channel_1.clamp(value_1),
            profile.channel_2.clamp(value_2),
        );
        let status = classify(domain, &reading);
        let series = TelemetrySeries::synthesize(domain, reading.value_1);

        DiagnosticsReport {
            reading,
            status,
            series,
        }
    }
}
