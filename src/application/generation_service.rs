// Generation service - Use case for the prompt/request pipeline
use crate::application::error::{GenerationError, ValidationError};
use crate::application::generation_backend::GenerationBackend;
use crate::application::prompt::build_prompt;
use crate::domain::generation::{GenerationRequest, GenerationResult};
use std::sync::Arc;

#[derive(Clone)]
pub struct GenerationService {
    backend: Arc<dyn GenerationBackend>,
    default_model: String,
}

impl GenerationService {
    pub fn new(backend: Arc<dyn GenerationBackend>, default_model: String) -> Self {
        Self {
            backend,
            default_model,
        }
    }

    pub fn default_model(&self) -> &str {
        &self.default_model
    }

    /// List the models the backend offers for generation. A listing failure
    /// degrades to the configured default model rather than aborting the
    /// session.
    pub async fn available_models(&self) -> Vec<String> {
        match self.backend.list_model_ids().await {
            Ok(ids) if !ids.is_empty() => ids,
            Ok(_) => {
                tracing::warn!(
                    "backend returned no generation models, falling back to {}",
                    self.default_model
                );
                vec![self.default_model.clone()]
            }
            Err(e) => {
                tracing::warn!("model listing failed ({}), falling back to {}", e, self.default_model);
                vec![self.default_model.clone()]
            }
        }
    }

    /// The submission invariant: requirement text must carry something.
    pub fn validate(&self, request: &GenerationRequest) -> Result<(), ValidationError> {
        if request.requirement_text.trim().is_empty() {
            return Err(ValidationError::EmptyRequirement);
        }
        Ok(())
    }

    /// Run a request through the backend and wrap the returned text.
    ///
    /// Any backend failure surfaces as a single `GenerationError`; there is
    /// no retry and no partial result. The caller owns the cache slot and
    /// decides what happens to the previous result.
    pub async fn submit(
        &self,
        model_id: &str,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, GenerationError> {
        let prompt = build_prompt(
            request.domain,
            request.target_language,
            &request.requirement_text,
        );

        tracing::debug!(
            "submitting {} chars of prompt to model {}",
            prompt.len(),
            model_id
        );

        let source_text = self.backend.generate(model_id, &prompt).await?;
        Ok(GenerationResult::new(
            source_text,
            request.target_language,
            model_id.to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error::ConfigurationError;
    use crate::domain::vehicle::{TargetLanguage, VehicleDomain};
    use async_trait::async_trait;

    struct StubBackend {
        models: Result<Vec<String>, ()>,
        response: Result<String, ()>,
    }

    #[async_trait]
    impl GenerationBackend for StubBackend {
        async fn list_model_ids(&self) -> Result<Vec<String>, ConfigurationError> {
            self.models
                .clone()
                .map_err(|_| ConfigurationError::ModelListing("listing unavailable".to_string()))
        }

        async fn generate(&self, _model_id: &str, _prompt: &str) -> Result<String, GenerationError> {
            self.response
                .clone()
                .map_err(|_| GenerationError::Request("backend down".to_string()))
        }
    }

    fn service(backend: StubBackend) -> GenerationService {
        GenerationService::new(Arc::new(backend), "gemini-1.5-flash".to_string())
    }

    fn request(text: &str) -> GenerationRequest {
        GenerationRequest::new(
            VehicleDomain::Bms,
            TargetLanguage::Rust,
            text.to_string(),
        )
    }

    #[tokio::test]
    async fn test_listing_failure_falls_back_to_default_model() {
        let service = service(StubBackend {
            models: Err(()),
            response: Ok(String::new()),
        });
        assert_eq!(service.available_models().await, vec!["gemini-1.5-flash"]);
    }

    #[tokio::test]
    async fn test_empty_listing_falls_back_to_default_model() {
        let service = service(StubBackend {
            models: Ok(vec![]),
            response: Ok(String::new()),
        });
        assert_eq!(service.available_models().await, vec!["gemini-1.5-flash"]);
    }

    #[tokio::test]
    async fn test_submit_wraps_backend_text() {
        let service = service(StubBackend {
            models: Ok(vec![]),
            response: Ok("struct Bms;".to_string()),
        });
        let result = service
            .submit("gemini-1.5-flash", &request("build a BMS"))
            .await
            .unwrap();
        assert_eq!(result.source_text, "struct Bms;");
        assert_eq!(result.file_extension, "rs");
        assert_eq!(result.model_id, "gemini-1.5-flash");
    }

    #[tokio::test]
    async fn test_submit_surfaces_backend_failure() {
        let service = service(StubBackend {
            models: Ok(vec![]),
            response: Err(()),
        });
        let err = service
            .submit("gemini-1.5-flash", &request("build a BMS"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("backend down"));
    }

    #[test]
    fn test_blank_requirement_text_is_rejected() {
        let service = service(StubBackend {
            models: Ok(vec![]),
            response: Ok(String::new()),
        });
        assert!(service.validate(&request("  \n ")).is_err());
        assert!(service.validate(&request("real requirements")).is_ok());
    }
}
