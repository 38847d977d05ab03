// Error taxonomy for the workbench use cases
use thiserror::Error;

/// The generation backend is unreachable or misconfigured. Never fatal: the
/// session degrades (e.g. to the default model) and continues.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("failed to reach the generation backend: {0}")]
    Unreachable(String),

    #[error("model listing failed: {0}")]
    ModelListing(String),
}

/// A generation call failed or returned unusable content. Surfaced verbatim
/// to the view-model; no retry, no partial result.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("generation request failed: {0}")]
    Request(String),

    #[error("generation backend returned status {status}: {body}")]
    Backend { status: u16, body: String },

    #[error("generation backend returned no content")]
    EmptyResponse,
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("requirement text is empty; nothing to send to the generator")]
    EmptyRequirement,
}
