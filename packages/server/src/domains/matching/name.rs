/// A name split into the two columns the contact store is keyed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameParts {
    pub first_name: String,
    pub last_name: String,
}

impl NameParts {
    /// Split on the first run of whitespace after trimming.
    ///
    /// The first token is the first name; everything after the first gap is
    /// the last name, kept intact ("Mary Ann Smith" → "Mary" / "Ann Smith").
    /// A single token yields an empty last name. Blank input yields `None`.
    pub fn parse(name: &str) -> Option<Self> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return None;
        }

        let (first_name, last_name) = match trimmed.split_once(char::is_whitespace) {
            Some((first, rest)) => (first, rest.trim_start()),
            None => (trimmed, ""),
        };

        Some(Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        })
    }
}
