// Synthetic telemetry series for the validation dashboard
use super::vehicle::VehicleDomain;
use rand::Rng;
use serde::Serialize;

pub const SERIES_LEN: usize = 20;

/// Per-sample discharge slope for the BMS curve.
const BMS_DISCHARGE_STEP: f64 = 0.05;
/// Jitter bound for BMS voltage samples.
const BMS_JITTER: f64 = 0.02;
/// Jitter bound for every other domain.
const GENERIC_JITTER: f64 = 1.0;

#[derive(Debug, Clone, Serialize)]
pub struct TelemetrySeries {
    pub samples: Vec<f64>,
}

impl TelemetrySeries {
    /// Synthesize a display-only series from the first sensor channel.
    ///
    /// BMS gets a discharging curve (falling slope plus small jitter); every
    /// other domain gets flat noise around the current value. Noise is drawn
    /// fresh per sample per call, so two calls with identical inputs yield
    /// different series.
    pub fn synthesize(domain: VehicleDomain, value_1: f64) -> Self {
        let mut rng = rand::thread_rng();
        let samples = match domain {
            VehicleDomain::Bms => (0..SERIES_LEN)
                .map(|i| {
                    value_1 - BMS_DISCHARGE_STEP * i as f64
                        + rng.gen_range(-BMS_JITTER..=BMS_JITTER)
                })
                .collect(),
            _ => (0..SERIES_LEN)
                .map(|_| value_1 + rng.gen_range(-GENERIC_JITTER..=GENERIC_JITTER))
                .collect(),
        };
        Self { samples }
    }
}
