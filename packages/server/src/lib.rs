// Contact Parser - API Core
//
// Extracts contact details from free text with an LLM and reconciles the
// extracted name against a Postgres contacts database.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
