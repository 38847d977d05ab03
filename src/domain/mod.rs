// Domain layer - Pure models and classification logic
pub mod diagnostics;
pub mod generation;
pub mod telemetry;
pub mod vehicle;
