use crate::error::BrokerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Credentials handed back for one binding.
///
/// The caller keeps this around until unbind: it is the only record of which
/// role to drop and whether dropping is allowed at all.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub username: String,
    pub password: Option<String>,
    pub database: Option<String>,
    /// True when the provisioner created the role and is responsible for dropping it.
    #[serde(default)]
    pub owned: bool,
}

impl CredentialRecord {
    pub fn generated(username: String, password: String, database: String) -> Self {
        Self {
            username,
            password: Some(password),
            database: Some(database),
            owned: true,
        }
    }

    pub fn adopted(username: String, password: Option<String>, database: Option<String>) -> Self {
        Self {
            username,
            password,
            database,
            owned: false,
        }
    }

    /// URL an application uses to log in as this binding, derived from the
    /// broker's own connection URL. The database name becomes a single
    /// percent-encoded path segment.
    pub fn connection_url(&self, base: &Url) -> Result<Url, BrokerError> {
        check_connection_base(base)?;
        let invalid = || BrokerError::InvalidConnectionUrl(base.to_string());
        let mut url = base.clone();
        url.set_username(&self.username).map_err(|_| invalid())?;
        url.set_password(self.password.as_deref())
            .map_err(|_| invalid())?;
        if let Some(db) = self.database.as_deref() {
            url.path_segments_mut()
                .map_err(|_| invalid())?
                .clear()
                .push(db);
        }
        Ok(url)
    }
}

/// Fails unless `base` has a non-empty host to hang credentials on.
/// Socket-style URLs such as `postgres:///db?host=/run/postgresql` do not.
pub fn check_connection_base(base: &Url) -> Result<(), BrokerError> {
    let mut trial = base.clone();
    match (base.host_str(), trial.set_username("u")) {
        (Some(host), Ok(())) if !host.is_empty() && !base.cannot_be_a_base() => Ok(()),
        _ => Err(BrokerError::InvalidConnectionUrl(base.to_string())),
    }
}

impl fmt::Debug for CredentialRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialRecord")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("database", &self.database)
            .field("owned", &self.owned)
            .finish()
    }
}
