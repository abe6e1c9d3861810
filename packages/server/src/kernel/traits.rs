// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (extraction, matching) lives in domain functions that use these traits.
//
// Naming convention: Base* for trait names (e.g., BaseAI, BaseContactStore)

use anyhow::Result;
use async_trait::async_trait;

use crate::domains::contacts::ContactMatch;

// =============================================================================
// AI Trait (Infrastructure - Generic LLM capabilities)
// =============================================================================

#[async_trait]
pub trait BaseAI: Send + Sync {
    /// Run a single-shot, deterministic generation with the given model and
    /// return the raw response body. The provider is asked for JSON only;
    /// parsing is the caller's job.
    async fn generate_json(&self, model: &str, prompt: &str) -> Result<String>;
}

// =============================================================================
// Contact Store Trait (Infrastructure - read-only system of record)
// =============================================================================

#[async_trait]
pub trait BaseContactStore: Send + Sync {
    /// Case-insensitive lookup on both name parts. Returns at most one row.
    async fn find_by_name(&self, first_name: &str, last_name: &str)
        -> Result<Option<ContactMatch>>;

    /// Round-trip to the store (`SELECT 1`).
    async fn ping(&self) -> Result<()>;
}
