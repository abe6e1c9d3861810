//! Server dependencies for request handlers (using traits for testability)
//!
//! This module provides the dependency container shared by every request.
//! All external services use trait abstractions to enable testing.

use std::sync::Arc;

use crate::domains::extraction::ModelCatalog;
use crate::kernel::{BaseAI, BaseContactStore};

/// Server dependencies accessible to domain actions
#[derive(Clone)]
pub struct ServerDeps {
    /// LLM provider used by the extractor
    pub ai: Arc<dyn BaseAI>,
    /// Read-only system of record for known contacts
    pub contacts: Arc<dyn BaseContactStore>,
    /// Allow-listed models and their instruction templates
    pub models: Arc<ModelCatalog>,
}

impl ServerDeps {
    pub fn new(
        ai: Arc<dyn BaseAI>,
        contacts: Arc<dyn BaseContactStore>,
        models: ModelCatalog,
    ) -> Self {
        Self {
            ai,
            contacts,
            models: Arc::new(models),
        }
    }
}
