// Port for the external code-generation capability
use crate::application::error::{ConfigurationError, GenerationError};
use async_trait::async_trait;

#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// List the ids of models that support content generation.
    async fn list_model_ids(&self) -> Result<Vec<String>, ConfigurationError>;

    /// Run a single prompt through the named model and return the raw text.
    async fn generate(&self, model_id: &str, prompt: &str) -> Result<String, GenerationError>;
}
