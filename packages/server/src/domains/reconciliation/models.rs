use serde::{Deserialize, Serialize};

use crate::domains::extraction::ExtractionResult;
use crate::domains::matching::ContactStatus;

/// Extraction fields merged with the known-contact status.
///
/// `company` is only ever set when `found_in_database` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationResponse {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub found_in_database: bool,
    pub company: Option<String>,
}

impl ReconciliationResponse {
    pub fn new(extracted: ExtractionResult, status: ContactStatus) -> Self {
        Self {
            name: extracted.name,
            email: extracted.email,
            phone: extracted.phone,
            found_in_database: status.found,
            company: status.company.filter(|_| status.found),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_nulls_explicitly() {
        let response = ReconciliationResponse::new(
            ExtractionResult {
                name: Some("Jane Doe".into()),
                ..Default::default()
            },
            ContactStatus::not_found(),
        );

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Jane Doe",
                "email": null,
                "phone": null,
                "found_in_database": false,
                "company": null
            })
        );
    }

    #[test]
    fn company_requires_a_match() {
        let response = ReconciliationResponse::new(
            ExtractionResult::default(),
            ContactStatus {
                found: false,
                company: Some("Acme".into()),
            },
        );

        assert_eq!(response.company, None);
    }
}
