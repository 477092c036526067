//! Database module: statement text and the Postgres-backed catalog.
//!
//! Layout:
//! - `statements.rs`: role DDL builders and catalog lookups
//! - `postgres.rs`: `PgCatalog`, the sqlx pool implementation of `RoleCatalog`

pub mod postgres;
pub mod statements;

pub use postgres::PgCatalog;
pub use statements::CatalogQuery;
