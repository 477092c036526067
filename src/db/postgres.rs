use crate::config::Config;
use crate::db::statements::CatalogQuery;
use crate::error::BrokerError;
use crate::service::catalog::RoleCatalog;
use sqlx::postgres::{PgPool, PgPoolOptions};

/// [`RoleCatalog`] backed by a Postgres/Greenplum connection pool.
#[derive(Clone)]
pub struct PgCatalog {
    pool: PgPool,
}

impl PgCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(cfg: &Config) -> Result<Self, BrokerError> {
        let pool = PgPoolOptions::new()
            .max_connections(cfg.max_connections)
            .acquire_timeout(cfg.acquire_timeout())
            .connect(&cfg.database_url)
            .await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl RoleCatalog for PgCatalog {
    async fn execute(&self, statement: &str) -> Result<(), sqlx::Error> {
        sqlx::query(statement)
            .persistent(false)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn count(&self, query: CatalogQuery, name: &str) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(query.sql())
            .bind(name)
            .fetch_one(&self.pool)
            .await
    }
}
