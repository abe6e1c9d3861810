use serde::{Deserialize, Serialize};

/// Fields extracted from free-form text. Any of them may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}
