// Code generation request/result domain models
use super::vehicle::{TargetLanguage, VehicleDomain};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub domain: VehicleDomain,
    pub target_language: TargetLanguage,
    pub requirement_text: String,
}

impl GenerationRequest {
    pub fn new(
        domain: VehicleDomain,
        target_language: TargetLanguage,
        requirement_text: String,
    ) -> Self {
        Self {
            domain,
            target_language,
            requirement_text,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationResult {
    pub source_text: String,
    pub file_extension: String,
    pub model_id: String,
    pub generated_at: DateTime<Utc>,
}

impl GenerationResult {
    pub fn new(source_text: String, target_language: TargetLanguage, model_id: String) -> Self {
        Self {
            source_text,
            file_extension: target_language.file_extension().to_string(),
            model_id,
            generated_at: Utc::now(),
        }
    }

    pub fn download_filename(&self) -> String {
        format!("generated_code.{}", self.file_extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_filename() {
        let result = GenerationResult::new(
            "fn main() {}".to_string(),
            TargetLanguage::Rust,
            "gemini-1.5-flash".to_string(),
        );
        assert_eq!(result.download_filename(), "generated_code.rs");
    }
}
