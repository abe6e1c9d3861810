pub mod models;

// Re-export commonly used types
pub use models::ContactMatch;
