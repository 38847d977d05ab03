// Presentation layer - HTTP surface serving the view-model
pub mod app_state;
pub mod handlers;
