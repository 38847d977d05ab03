// Session-scoped workspace state
//
// Everything the original tool kept as ambient process globals (the cached
// last result, the current selections and slider values) lives here as one
// explicit object, created at session start and dropped with the session.
use crate::application::diagnostics_service::DiagnosticsReport;
use crate::application::prompt::default_requirement_text;
use crate::domain::diagnostics::SensorReading;
use crate::domain::generation::GenerationResult;
use crate::domain::vehicle::{TargetLanguage, VehicleDomain};

#[derive(Debug, Clone)]
pub struct SessionState {
    pub domain: VehicleDomain,
    pub language: TargetLanguage,
    pub requirement_text: String,
    pub last_result: Option<GenerationResult>,
    pub last_error: Option<String>,
    pub reading: SensorReading,
    pub diagnostics: Option<DiagnosticsReport>,
}

impl SessionState {
    pub fn new() -> Self {
        let domain = VehicleDomain::Bms;
        let language = TargetLanguage::CppMisra;
        Self {
            domain,
            language,
            requirement_text: default_requirement_text(domain, language),
            last_result: None,
            last_error: None,
            reading: default_reading(domain),
            diagnostics: None,
        }
    }

    /// Switch domain/language: re-seed the editable requirement text and
    /// reset the sensor reading to the new domain's defaults. The cached
    /// generation result is kept; it belongs to the session, not the
    /// selection.
    pub fn select(&mut self, domain: VehicleDomain, language: TargetLanguage) {
        self.domain = domain;
        self.language = language;
        self.requirement_text = default_requirement_text(domain, language);
        self.reading = default_reading(domain);
        self.diagnostics = None;
    }

    pub fn record_success(&mut self, result: GenerationResult) {
        self.last_result = Some(result);
        self.last_error = None;
    }

    /// A failed generation keeps the last good result available; only the
    /// error message is replaced.
    pub fn record_failure(&mut self, message: String) {
        self.last_error = Some(message);
    }

    pub fn record_diagnostics(&mut self, report: DiagnosticsReport) {
        self.reading = report.reading;
        self.diagnostics = Some(report);
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

fn default_reading(domain: VehicleDomain) -> SensorReading {
    let profile = domain.sensor_profile();
    SensorReading::new(profile.channel_1.default, profile.channel_2.default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_seeded() {
        let session = SessionState::new();
        assert!(session.requirement_text.contains("Battery Management System (BMS)"));
        assert_eq!(session.reading.value_1, 3.7);
        assert_eq!(session.reading.value_2, 25.0);
        assert!(session.last_result.is_none());
    }

    #[test]
    fn test_select_reseeds_text_and_reading() {
        let mut session = SessionState::new();
        session.requirement_text = "hand-edited".to_string();
        session.select(VehicleDomain::Tpms, TargetLanguage::Kotlin);

        assert!(session.requirement_text.contains("Kotlin (Android/HMI)"));
        assert!(session.requirement_text.contains("Tyre Pressure Monitoring (TPMS)"));
        assert_eq!(session.reading.value_1, 32.0);
    }

    #[test]
    fn test_failure_retains_last_good_result() {
        let mut session = SessionState::new();
        session.record_success(GenerationResult::new(
            "int main() {}".to_string(),
            TargetLanguage::CppMisra,
            "gemini-1.5-flash".to_string(),
        ));
        session.record_failure("quota exceeded".to_string());

        assert_eq!(session.last_error.as_deref(), Some("quota exceeded"));
        let kept = session.last_result.expect("previous result must survive");
        assert_eq!(kept.source_text, "int main() {}");
    }

    #[test]
    fn test_success_clears_previous_error() {
        let mut session = SessionState::new();
        session.record_failure("network error".to_string());
        session.record_success(GenerationResult::new(
            "pass".to_string(),
            TargetLanguage::Python,
            "gemini-1.5-flash".to_string(),
        ));
        assert!(session.last_error.is_none());
    }
}
