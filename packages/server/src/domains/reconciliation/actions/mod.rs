//! Reconciliation domain actions

pub mod reconcile;

pub use reconcile::reconcile;
