// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into ServerDeps for tests.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::{BaseAI, BaseContactStore, ServerDeps};
use crate::domains::contacts::ContactMatch;
use crate::domains::extraction::ModelCatalog;

// =============================================================================
// Mock AI
// =============================================================================

/// Queued response for the mock AI
#[derive(Debug, Clone)]
enum MockReply {
    Body(String),
    Failure(String),
}

/// Arguments captured from a generate call
#[derive(Debug, Clone)]
pub struct GenerateCallArgs {
    pub model: String,
    pub prompt: String,
}

pub struct MockAI {
    responses: Arc<Mutex<Vec<MockReply>>>,
    calls: Arc<Mutex<Vec<GenerateCallArgs>>>,
}

impl MockAI {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a raw response body to the queue
    pub fn with_response(self, response: impl Into<String>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push(MockReply::Body(response.into()));
        self
    }

    /// Add a JSON response to the queue (will be serialized)
    pub fn with_json_response<T: serde::Serialize>(self, data: &T) -> Self {
        let json = serde_json::to_string(data).expect("Failed to serialize mock response");
        self.with_response(json)
    }

    /// Add a provider failure to the queue
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push(MockReply::Failure(message.into()));
        self
    }

    /// Get all calls that were sent to the AI
    pub fn calls(&self) -> Vec<GenerateCallArgs> {
        self.calls.lock().unwrap().clone()
    }

    /// Get the number of times the AI was called
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for MockAI {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseAI for MockAI {
    async fn generate_json(&self, model: &str, prompt: &str) -> Result<String> {
        self.calls.lock().unwrap().push(GenerateCallArgs {
            model: model.to_string(),
            prompt: prompt.to_string(),
        });

        let mut responses = self.responses.lock().unwrap();
        let reply = if responses.is_empty() {
            MockReply::Body(r#"{"name": null, "email": null, "phone": null}"#.to_string())
        } else {
            responses.remove(0)
        };

        match reply {
            MockReply::Body(body) => Ok(body),
            MockReply::Failure(message) => Err(anyhow::anyhow!(message)),
        }
    }
}

// =============================================================================
// Mock Contact Store
// =============================================================================

/// In-memory contact store keyed by lowercased (first_name, last_name)
pub struct MockContactStore {
    contacts: Arc<Mutex<HashMap<(String, String), Option<String>>>>,
    failure: Option<String>,
    lookups: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockContactStore {
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(Mutex::new(HashMap::new())),
            failure: None,
            lookups: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A store whose every call fails, as if the database were down
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::new()
        }
    }

    /// Add a known contact, optionally affiliated with a company
    pub fn with_contact(self, first_name: &str, last_name: &str, company: Option<&str>) -> Self {
        self.contacts.lock().unwrap().insert(
            (first_name.to_lowercase(), last_name.to_lowercase()),
            company.map(str::to_string),
        );
        self
    }

    /// Get all (first_name, last_name) pairs that were looked up
    pub fn lookups(&self) -> Vec<(String, String)> {
        self.lookups.lock().unwrap().clone()
    }

    /// Get the number of lookups performed
    pub fn lookup_count(&self) -> usize {
        self.lookups.lock().unwrap().len()
    }
}

impl Default for MockContactStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseContactStore for MockContactStore {
    async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<ContactMatch>> {
        self.lookups
            .lock()
            .unwrap()
            .push((first_name.to_string(), last_name.to_string()));

        if let Some(message) = &self.failure {
            return Err(anyhow::anyhow!(message.clone()));
        }

        let key = (first_name.to_lowercase(), last_name.to_lowercase());
        Ok(self
            .contacts
            .lock()
            .unwrap()
            .get(&key)
            .map(|company| ContactMatch {
                first_name: key.0.clone(),
                last_name: key.1.clone(),
                company_name: company.clone(),
            }))
    }

    async fn ping(&self) -> Result<()> {
        match &self.failure {
            Some(message) => Err(anyhow::anyhow!(message.clone())),
            None => Ok(()),
        }
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// Mock services wired into a ServerDeps, with handles kept for assertions
pub struct TestDependencies {
    pub ai: Arc<MockAI>,
    pub contacts: Arc<MockContactStore>,
}

impl TestDependencies {
    pub fn new(ai: MockAI, contacts: MockContactStore) -> Self {
        Self {
            ai: Arc::new(ai),
            contacts: Arc::new(contacts),
        }
    }

    /// Build ServerDeps using the default model catalog
    pub fn server_deps(&self) -> ServerDeps {
        ServerDeps::new(
            self.ai.clone(),
            self.contacts.clone(),
            ModelCatalog::default(),
        )
    }
}
