//! Extraction domain actions - entry-point business logic

pub mod extract;

pub use extract::{extract_contact, parse_extraction};
