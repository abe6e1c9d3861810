use tracing::info;

use crate::domains::extraction::{extract_contact, ExtractionError};
use crate::domains::matching::{match_contact, MatchOutcome};
use crate::domains::reconciliation::ReconciliationResponse;
use crate::kernel::ServerDeps;

/// Extract contact fields from `text`, then check the name against known
/// contacts.
///
/// Extraction errors propagate unchanged and the store is never queried.
/// Matching cannot fail: a store outage reads as "not found".
pub async fn reconcile(
    text: &str,
    model_id: &str,
    deps: &ServerDeps,
) -> Result<ReconciliationResponse, ExtractionError> {
    let extracted = extract_contact(text, model_id, deps).await?;

    let outcome = match_contact(extracted.name.as_deref(), deps).await;
    let lookup_failed = matches!(outcome, MatchOutcome::LookupFailed { .. });
    let status = outcome.into_status();

    info!(
        model = %model_id,
        found_in_database = status.found,
        lookup_failed,
        "Contact reconciled"
    );

    Ok(ReconciliationResponse::new(extracted, status))
}
