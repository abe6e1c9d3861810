//! Matching domain actions

pub mod match_contact;

pub use match_contact::match_contact;
