// Threshold-based diagnostic classification
use super::vehicle::VehicleDomain;
use serde::{Deserialize, Serialize};

/// BMS cell voltage below this is a fault (strict).
const BMS_MIN_VOLTAGE: f64 = 3.2;
/// BMS pack temperature above this is a fault (strict).
const BMS_MAX_TEMPERATURE: f64 = 45.0;
/// TPMS pressure below this is under-inflation (strict).
const TPMS_MIN_PRESSURE: f64 = 28.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SensorReading {
    pub value_1: f64,
    pub value_2: f64,
}

impl SensorReading {
    pub fn new(value_1: f64, value_2: f64) -> Self {
        Self { value_1, value_2 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiagnosticStatus {
    Normal,
    CriticalWarning,
    LowPressure,
}

/// Classify a reading against the active domain's threshold table.
///
/// Stateless: only the current reading is considered, and only the rule for
/// the active domain is evaluated. Boundary values are not faults (strict
/// inequalities throughout).
pub fn classify(domain: VehicleDomain, reading: &SensorReading) -> DiagnosticStatus {
    match domain {
        VehicleDomain::Bms => {
            if reading.value_1 < BMS_MIN_VOLTAGE || reading.value_2 > BMS_MAX_TEMPERATURE {
                DiagnosticStatus::CriticalWarning
            } else {
                DiagnosticStatus::Normal
            }
        }
        VehicleDomain::Tpms => {
            if reading.value_1 < TPMS_MIN_PRESSURE {
                DiagnosticStatus::LowPressure
            } else {
                DiagnosticStatus::Normal
            }
        }
        VehicleDomain::LaneKeepAssist | VehicleDomain::MotorController => DiagnosticStatus::Normal,
    }
}
