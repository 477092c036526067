pub mod cli;
pub mod config;
pub mod error;
pub mod service;
pub mod db;
pub mod types;

pub use error::{BrokerError, ErrorKind};
pub use service::{CredentialProvisioner, RoleCatalog};
pub use types::{BindingParameters, CredentialRecord};
