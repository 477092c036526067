#![allow(dead_code)]

use dwaas_broker::RoleCatalog;
use dwaas_broker::db::CatalogQuery;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// In-memory warehouse: logs every statement and tracks the roles it creates.
#[derive(Clone, Default)]
pub struct RecordingCatalog {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    statements: Vec<String>,
    roles: HashSet<String>,
    databases: HashSet<String>,
    reject_next: Option<String>,
    reject_next_query: Option<String>,
}

impl RecordingCatalog {
    pub fn with_databases(names: &[&str]) -> Self {
        let catalog = Self::default();
        catalog
            .inner
            .lock()
            .unwrap()
            .databases
            .extend(names.iter().map(|n| n.to_string()));
        catalog
    }

    pub fn statements(&self) -> Vec<String> {
        self.inner.lock().unwrap().statements.clone()
    }

    /// Fail the next `execute` call with the given driver message.
    pub fn reject_next(&self, message: &str) {
        self.inner.lock().unwrap().reject_next = Some(message.to_string());
    }

    /// Fail the next `count` call with the given driver message.
    pub fn reject_next_query(&self, message: &str) {
        self.inner.lock().unwrap().reject_next_query = Some(message.to_string());
    }
}

impl RoleCatalog for RecordingCatalog {
    async fn execute(&self, statement: &str) -> Result<(), sqlx::Error> {
        let mut inner = self.inner.lock().unwrap();
        inner.statements.push(statement.to_string());
        if let Some(message) = inner.reject_next.take() {
            return Err(sqlx::Error::Protocol(message));
        }

        let words: Vec<&str> = statement.split_whitespace().collect();
        match words.as_slice() {
            ["CREATE", "ROLE", name, ..] => {
                if !inner.roles.insert(name.to_string()) {
                    return Err(sqlx::Error::Protocol(format!("role \"{name}\" already exists")));
                }
            }
            ["DROP", "ROLE", "IF", "EXISTS", name] => {
                inner.roles.remove(*name);
            }
            _ => {}
        }
        Ok(())
    }

    async fn count(&self, query: CatalogQuery, name: &str) -> Result<i64, sqlx::Error> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(message) = inner.reject_next_query.take() {
            return Err(sqlx::Error::Protocol(message));
        }
        let found = match query {
            CatalogQuery::Databases => inner.databases.contains(name),
            CatalogQuery::Roles => inner.roles.contains(name),
        };
        Ok(found as i64)
    }
}
