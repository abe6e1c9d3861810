use tracing::{debug, warn};

use crate::domains::matching::{MatchOutcome, NameParts};
use crate::kernel::ServerDeps;

/// Look up an extracted name among known contacts.
///
/// A missing or blank name short-circuits to `NotMatched` without touching
/// the store. Store errors are logged and reported as `LookupFailed`; this
/// function never fails.
pub async fn match_contact(name: Option<&str>, deps: &ServerDeps) -> MatchOutcome {
    let Some(parts) = name.and_then(NameParts::parse) else {
        debug!("No usable name extracted, skipping contact lookup");
        return MatchOutcome::NotMatched;
    };

    match deps
        .contacts
        .find_by_name(&parts.first_name, &parts.last_name)
        .await
    {
        Ok(Some(contact)) => {
            debug!(
                has_company = contact.company_name.is_some(),
                "Contact matched"
            );
            MatchOutcome::Matched {
                company: contact.company_name,
            }
        }
        Ok(None) => {
            debug!("No matching contact");
            MatchOutcome::NotMatched
        }
        Err(e) => {
            warn!(error = %e, "Contact lookup failed, reporting as not found");
            MatchOutcome::LookupFailed {
                reason: format!("{:#}", e),
            }
        }
    }
}
