use crate::db::statements::{self, CatalogQuery};
use crate::error::BrokerError;
use crate::service::catalog::RoleCatalog;
use crate::service::sanitizer::{PASSWORD_PREFIX, USERNAME_PREFIX, check_string, generate_identifier};
use crate::types::{BindingParameters, CredentialRecord};
use tracing::{debug, error, info};

/// Issues and revokes per-binding warehouse roles.
///
/// Holds no per-binding state: ownership travels in the returned
/// [`CredentialRecord`], so one value can serve concurrent bindings.
#[derive(Clone)]
pub struct CredentialProvisioner<C> {
    catalog: C,
    validate_adopted: bool,
}

impl<C: RoleCatalog> CredentialProvisioner<C> {
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            validate_adopted: false,
        }
    }

    /// Also reject non-alphanumeric usernames, passwords and database names on
    /// the adopt path.
    pub fn validate_adopted(mut self, enabled: bool) -> Self {
        self.validate_adopted = enabled;
        self
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Generate a fresh role, or adopt caller-supplied credentials when a
    /// `username` is present.
    pub async fn resolve(&self, params: &BindingParameters) -> Result<CredentialRecord, BrokerError> {
        debug!("resolving binding credentials");

        let Some(username) = params.username()? else {
            return self.generate(params).await;
        };

        let password = params.password()?;
        let database = params.database()?;
        if self.validate_adopted {
            check_string(username)?;
            password.map(check_string).transpose()?;
            database.map(check_string).transpose()?;
        }

        info!(role = %username, "bind request with provided credentials; no role created");
        Ok(CredentialRecord::adopted(
            username.to_string(),
            password.map(str::to_string),
            database.map(str::to_string),
        ))
    }

    async fn generate(&self, params: &BindingParameters) -> Result<CredentialRecord, BrokerError> {
        let username = generate_identifier(USERNAME_PREFIX);
        let password = generate_identifier(PASSWORD_PREFIX);

        let Some(database) = params.database()? else {
            error!("bind request without a database name");
            return Err(BrokerError::MissingDatabase);
        };

        let statement = statements::create_role(check_string(&username)?, check_string(&password)?);
        self.catalog
            .execute(&statement)
            .await
            .map_err(|source| BrokerError::CreateRole {
                role: username.clone(),
                source,
            })?;

        info!(role = %username, database = %database, "created role");
        Ok(CredentialRecord::generated(
            username,
            password,
            database.to_string(),
        ))
    }

    /// Drop the role behind `record` if this provisioner created it.
    pub async fn release(&self, record: &CredentialRecord) -> Result<(), BrokerError> {
        if !record.owned {
            debug!(role = %record.username, "role supplied by caller; leaving in place");
            return Ok(());
        }

        let statement = statements::drop_role(check_string(&record.username)?);
        self.catalog
            .execute(&statement)
            .await
            .map_err(|source| BrokerError::DropRole {
                role: record.username.clone(),
                source,
            })?;

        info!(role = %record.username, "dropped role");
        Ok(())
    }

    pub async fn database_exists(&self, name: &str) -> Result<bool, BrokerError> {
        Ok(self.catalog.count(CatalogQuery::Databases, name).await? > 0)
    }

    pub async fn role_exists(&self, name: &str) -> Result<bool, BrokerError> {
        Ok(self.catalog.count(CatalogQuery::Roles, name).await? == 1)
    }
}
