// Postgres-backed BaseContactStore

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;

use super::BaseContactStore;
use crate::domains::contacts::ContactMatch;

/// Contact store over the `contacts`/`companies` tables.
///
/// Every call checks a connection out of the pool and returns it when the
/// query future completes or is dropped, including on error.
#[derive(Clone)]
pub struct PgContactStore {
    pool: PgPool,
}

impl PgContactStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BaseContactStore for PgContactStore {
    async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<ContactMatch>> {
        ContactMatch::find_by_name(first_name, last_name, &self.pool).await
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
