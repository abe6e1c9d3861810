//! Contact matching domain - reconcile an extracted name with known contacts
//!
//! Store failures are absorbed here: the matcher never returns an error, it
//! reports [`MatchOutcome::LookupFailed`] and callers collapse that into "not
//! found".

pub mod actions;
pub mod models;
pub mod name;

pub use actions::match_contact;
pub use models::{ContactStatus, MatchOutcome};
pub use name::NameParts;
