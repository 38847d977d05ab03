// Vehicle domain and target language models
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleDomain {
    Bms,
    Tpms,
    LaneKeepAssist,
    MotorController,
}

impl VehicleDomain {
    pub const ALL: [VehicleDomain; 4] = [
        VehicleDomain::Bms,
        VehicleDomain::Tpms,
        VehicleDomain::LaneKeepAssist,
        VehicleDomain::MotorController,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            VehicleDomain::Bms => "Battery Management System (BMS)",
            VehicleDomain::Tpms => "Tyre Pressure Monitoring (TPMS)",
            VehicleDomain::LaneKeepAssist => "ADAS - Lane Keep Assist",
            VehicleDomain::MotorController => "Motor Controller",
        }
    }

    /// Slider metadata for the two sensor channels of this domain.
    pub fn sensor_profile(&self) -> SensorProfile {
        match self {
            VehicleDomain::Bms => SensorProfile {
                channel_1: SensorChannel::new("Voltage", "V", 0.0, 5.0, 3.7),
                channel_2: SensorChannel::new("Temp", "°C", -10.0, 100.0, 25.0),
            },
            VehicleDomain::Tpms => SensorProfile {
                channel_1: SensorChannel::new("Pressure", "PSI", 0.0, 50.0, 32.0),
                channel_2: SensorChannel::new("Temp", "°C", 0.0, 80.0, 30.0),
            },
            VehicleDomain::LaneKeepAssist | VehicleDomain::MotorController => SensorProfile {
                channel_1: SensorChannel::new("Sensor 1", "", 0.0, 100.0, 50.0),
                channel_2: SensorChannel::new("Sensor 2", "", 0.0, 100.0, 50.0),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetLanguage {
    CppMisra,
    Python,
    Rust,
    Kotlin,
}

impl TargetLanguage {
    pub const ALL: [TargetLanguage; 4] = [
        TargetLanguage::CppMisra,
        TargetLanguage::Python,
        TargetLanguage::Rust,
        TargetLanguage::Kotlin,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TargetLanguage::CppMisra => "C++ (MISRA Standard)",
            TargetLanguage::Python => "Python",
            TargetLanguage::Rust => "Rust",
            TargetLanguage::Kotlin => "Kotlin (Android/HMI)",
        }
    }

    /// Extension for the downloadable source file.
    /// Note: the original tool mapped everything non-C++ to "py"; Rust and
    /// Kotlin get their own extensions here (see DESIGN.md).
    pub fn file_extension(&self) -> &'static str {
        match self {
            TargetLanguage::CppMisra => "cpp",
            TargetLanguage::Python => "py",
            TargetLanguage::Rust => "rs",
            TargetLanguage::Kotlin => "kt",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SensorProfile {
    pub channel_1: SensorChannel,
    pub channel_2: SensorChannel,
}

#[derive(Debug, Clone, Serialize)]
pub struct SensorChannel {
    pub label: &'static str,
    pub unit: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl SensorChannel {
    fn new(label: &'static str, unit: &'static str, min: f64, max: f64, default: f64) -> Self {
        Self {
            label,
            unit,
            min,
            max,
            default,
        }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_extension() {
        assert_eq!(TargetLanguage::CppMisra.file_extension(), "cpp");
        assert_eq!(TargetLanguage::Python.file_extension(), "py");
        assert_eq!(TargetLanguage::Rust.file_extension(), "rs");
        assert_eq!(TargetLanguage::Kotlin.file_extension(), "kt");
    }

    #[test]
    fn test_bms_sensor_profile() {
        let profile = VehicleDomain::Bms.sensor_profile();
        assert_eq!(profile.channel_1.label, "Voltage");
        assert_eq!(profile.channel_1.default, 3.7);
        assert_eq!(profile.channel_2.min, -10.0);
        assert_eq!(profile.channel_2.max, 100.0);
    }

    #[test]
    fn test_channel_clamp() {
        let channel = VehicleDomain::Tpms.sensor_profile().channel_1;
        assert_eq!(channel.clamp(-5.0), 0.0);
        assert_eq!(channel.clamp(60.0), 50.0);
        assert_eq!(channel.clamp(32.0), 32.0);
    }
}
