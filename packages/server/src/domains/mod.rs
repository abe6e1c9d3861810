// Business domains
//
// contacts       - read-only view of known contacts and their companies
// extraction     - LLM extraction of name/email/phone from free text
// matching       - name splitting and contact lookup (fail-open)
// reconciliation - extraction then matching, merged into one response

pub mod contacts;
pub mod extraction;
pub mod matching;
pub mod reconciliation;
