use anyhow::Result;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// A known contact joined to its (optional) company display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ContactMatch {
    pub first_name: String,
    pub last_name: String,
    pub company_name: Option<String>,
}

impl ContactMatch {
    /// Find a contact by name, case-insensitively on both parts.
    ///
    /// At most one row is returned. With duplicate contacts, which one is
    /// returned is undefined. Only the name columns and `company_id` are
    /// read from `contacts`, whatever its key column is called.
    pub async fn find_by_name(
        first_name: &str,
        last_name: &str,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        let contact = sqlx::query_as::<_, Self>(
            r#"
            SELECT c.first_name, c.last_name, co.name AS company_name
            FROM contacts c
            LEFT JOIN companies co ON c.company_id = co.company_id
            WHERE LOWER(c.first_name) = LOWER($1)
              AND LOWER(c.last_name) = LOWER($2)
            LIMIT 1
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .fetch_optional(pool)
        .await?;
        Ok(contact)
    }
}
