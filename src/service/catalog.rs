use crate::db::statements::CatalogQuery;
use std::future::Future;

/// The slice of the warehouse the provisioner talks to.
pub trait RoleCatalog: Send + Sync {
    /// Run one statement with no result set.
    fn execute(&self, statement: &str) -> impl Future<Output = Result<(), sqlx::Error>> + Send;

    /// `count(*)` of catalog rows matching `name` exactly.
    fn count(
        &self,
        query: CatalogQuery,
        name: &str,
    ) -> impl Future<Output = Result<i64, sqlx::Error>> + Send;
}
