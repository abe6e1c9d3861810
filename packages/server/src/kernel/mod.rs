//! Kernel module - server infrastructure and dependencies.

pub mod contact_store;
pub mod deps;
pub mod llm_request;
pub mod test_dependencies;
pub mod traits;

// Re-export AI client types
pub use gemini_client::GeminiClient;

pub use contact_store::PgContactStore;
pub use deps::ServerDeps;
pub use test_dependencies::{MockAI, MockContactStore, TestDependencies};
pub use traits::*;
