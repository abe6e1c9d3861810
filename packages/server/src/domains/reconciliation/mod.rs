//! Reconciliation domain - extraction followed by contact matching
//!
//! Two sequential steps per request, no state kept between requests:
//! extraction (may fail, errors propagate) then matching (never fails).

pub mod actions;
pub mod models;

pub use actions::reconcile;
pub use models::ReconciliationResponse;
