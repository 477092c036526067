//! Command-line surface of the broker binary.

use crate::config::Config;
use crate::error::BrokerError;
use crate::service::{CredentialProvisioner, RoleCatalog};
use crate::types::credential::check_connection_base;
use crate::types::{BindingParameters, CredentialRecord};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::io::Read;

#[derive(Parser, Debug)]
#[command(name = "dwaas-broker", version, about = "Per-binding role provisioning for the data warehouse")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve credentials for a binding; creates a role unless a username is supplied.
    Bind {
        /// Binding parameters as a JSON object; read from stdin when omitted.
        params: Option<String>,
    },
    /// Release a credential record returned by `bind`.
    Unbind {
        /// Credential record as JSON; read from stdin when omitted.
        record: Option<String>,
    },
    DatabaseExists { name: String },
    RoleExists { name: String },
}

/// `bind` output: the record plus the URI an application connects with.
#[derive(Debug, Serialize)]
pub struct BindResponse {
    #[serde(flatten)]
    pub record: CredentialRecord,
    pub uri: String,
}

impl Cli {
    pub async fn run<C: RoleCatalog>(
        self,
        cfg: &Config,
        provisioner: &CredentialProvisioner<C>,
    ) -> Result<Value, BrokerError> {
        match self.command {
            Commands::Bind { params } => {
                let params: BindingParameters = read_json(params)?;
                // Base must accept credentials before any role is created.
                let base = cfg.base_url()?;
                check_connection_base(&base)?;
                let record = provisioner.resolve(&params).await?;
                let uri = match record.connection_url(&base) {
                    Ok(url) => url.to_string(),
                    Err(e) => {
                        provisioner.release(&record).await?;
                        return Err(e);
                    }
                };
                serde_json::to_value(BindResponse { record, uri }).map_err(json_error)
            }
            Commands::Unbind { record } => {
                let record: CredentialRecord = read_json(record)?;
                provisioner.release(&record).await?;
                Ok(json!({ "released": record.username, "dropped": record.owned }))
            }
            Commands::DatabaseExists { name } => {
                let exists = provisioner.database_exists(&name).await?;
                Ok(json!({ "database": name, "exists": exists }))
            }
            Commands::RoleExists { name } => {
                let exists = provisioner.role_exists(&name).await?;
                Ok(json!({ "role": name, "exists": exists }))
            }
        }
    }
}

fn read_json<T: DeserializeOwned>(arg: Option<String>) -> Result<T, BrokerError> {
    let raw = match arg {
        Some(raw) => raw,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| BrokerError::InvalidInput(format!("failed to read stdin: {e}")))?;
            buf
        }
    };
    serde_json::from_str(&raw).map_err(json_error)
}

fn json_error(e: serde_json::Error) -> BrokerError {
    BrokerError::InvalidInput(format!("invalid JSON: {e}"))
}
