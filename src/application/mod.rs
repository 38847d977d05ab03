// Application layer - Use cases, ports and session state
pub mod diagnostics_service;
pub mod error;
pub mod generation_backend;
pub mod generation_service;
pub mod prompt;
pub mod session;
