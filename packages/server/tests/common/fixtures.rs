//! Test fixtures for creating test data.
//!
//! The service never writes contacts, so fixtures insert rows directly.

use anyhow::Result;
use sqlx::PgPool;

/// Create a company and return its id
pub async fn create_test_company(pool: &PgPool, name: &str) -> Result<i32> {
    let company_id: i32 =
        sqlx::query_scalar("INSERT INTO companies (name) VALUES ($1) RETURNING company_id")
            .bind(name)
            .fetch_one(pool)
            .await?;
    Ok(company_id)
}

/// Create a contact, optionally linked to a company, and return its id
pub async fn create_test_contact(
    pool: &PgPool,
    first_name: &str,
    last_name: &str,
    company_id: Option<i32>,
) -> Result<i32> {
    let contact_id: i32 = sqlx::query_scalar(
        r#"
        INSERT INTO contacts (first_name, last_name, company_id)
        VALUES ($1, $2, $3)
        RETURNING contact_id
        "#,
    )
    .bind(first_name)
    .bind(last_name)
    .bind(company_id)
    .fetch_one(pool)
    .await?;
    Ok(contact_id)
}

/// Create a company and a contact that belongs to it
pub async fn create_test_contact_at(
    pool: &PgPool,
    first_name: &str,
    last_name: &str,
    company: &str,
) -> Result<i32> {
    let company_id = create_test_company(pool, company).await?;
    create_test_contact(pool, first_name, last_name, Some(company_id)).await
}
