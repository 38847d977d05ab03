// Gemini generation backend implementation
use crate::application::error::{ConfigurationError, GenerationError};
use crate::application::generation_backend::GenerationBackend;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct GeminiBackend {
    host: String,
    api_key: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct ListModelsResponse {
    #[serde(default)]
    models: Vec<ModelEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModelEntry {
    name: String,
    #[serde(default)]
    supported_generation_methods: Vec<String>,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

impl GeminiBackend {
    pub fn new(host: String, api_key: String) -> Self {
        Self {
            host: host.trim_end_matches('/').to_string(),
            api_key,
            client: reqwest::Client::new(),
        }
    }

    fn models_url(&self) -> String {
        format!("{}/v1beta/models?key={}", self.host, self.api_key)
    }

    fn generate_url(&self, model_id: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.host,
            urlencoding::encode(model_id),
            self.api_key
        )
    }

    /// Pull the text out of the first candidate, concatenating its parts.
    fn extract_text(response: GenerateContentResponse) -> Result<String, GenerationError> {
        let text: String = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(GenerationError::EmptyResponse);
        }
        Ok(text)
    }
}

#[async_trait]
impl GenerationBackend for GeminiBackend {
    async fn list_model_ids(&self) -> Result<Vec<String>, ConfigurationError> {
        let response = self
            .client
            .get(self.models_url())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ConfigurationError::Unreachable(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ConfigurationError::ModelListing(format!(
                "status {}: {}",
                status, body
            )));
        }

        let data = response
            .json::<ListModelsResponse>()
            .await
            .map_err(|e| ConfigurationError::ModelListing(e.to_string()))?;

        // Only models that can generate content; names come back as
        // "models/<id>"
        let ids = data
            .models
            .into_iter()
            .filter(|m| {
                m.supported_generation_methods
                    .iter()
                    .any(|method| method == "generateContent")
            })
            .map(|m| m.name.trim_start_matches("models/").to_string())
            .collect();

        Ok(ids)
    }

    async fn generate(&self, model_id: &str, prompt: &str) -> Result<String, GenerationError> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        };

        let response = self
            .client
            .post(self.generate_url(model_id))
            .header("Accept", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Backend { status, body });
        }

        let data = response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| GenerationError::Request(format!("malformed response: {}", e)))?;

        Self::extract_text(data)
    }
}
