//! Contact extraction domain - LLM-backed name/email/phone extraction
//!
//! A single deterministic generation per request, parsed into an
//! [`ExtractionResult`]. Model selection goes through the [`ModelCatalog`].

pub mod actions;
pub mod error;
pub mod models;
pub mod prompts;

pub use actions::{extract_contact, parse_extraction};
pub use error::ExtractionError;
pub use models::ExtractionResult;
pub use prompts::{ModelCatalog, CONTACT_EXTRACTION_PROMPT, DEFAULT_MODELS};
