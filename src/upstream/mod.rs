mod client;
mod types;

pub use client::{GenerateBackend, OllamaClient};
pub use types::GenerateRequest;
