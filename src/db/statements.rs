//! SQL text issued against the warehouse.
//!
//! Role names cannot be bound as parameters, so the DDL builders interpolate
//! them. Callers must pass values through [`check_string`] first.
//!
//! [`check_string`]: crate::service::sanitizer::check_string

/// Catalog lookups; the name is always a bound parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogQuery {
    Databases,
    Roles,
}

impl CatalogQuery {
    pub fn sql(self) -> &'static str {
        match self {
            CatalogQuery::Databases => "SELECT count(*) FROM pg_database WHERE datname = $1",
            CatalogQuery::Roles => "SELECT count(*) FROM pg_roles WHERE rolname = $1",
        }
    }
}

pub fn create_role(username: &str, password: &str) -> String {
    format!("CREATE ROLE {username} LOGIN SUPERUSER PASSWORD '{password}'")
}

pub fn drop_role(username: &str) -> String {
    format!("DROP ROLE IF EXISTS {username}")
}
