/// Internal result of a contact lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// A stored contact matched; `company` is its resolved company, if any
    Matched { company: Option<String> },
    /// No contact matched, or there was no usable name
    NotMatched,
    /// The store could not be queried
    LookupFailed { reason: String },
}

impl MatchOutcome {
    /// Collapse to the externally visible status. A failed lookup reads as
    /// "not found".
    pub fn into_status(self) -> ContactStatus {
        match self {
            MatchOutcome::Matched { company } => ContactStatus {
                found: true,
                company,
            },
            MatchOutcome::NotMatched | MatchOutcome::LookupFailed { .. } => {
                ContactStatus::not_found()
            }
        }
    }
}

/// Known-contact status as reported to callers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactStatus {
    pub found: bool,
    pub company: Option<String>,
}

impl ContactStatus {
    pub fn not_found() -> Self {
        Self::default()
    }
}
