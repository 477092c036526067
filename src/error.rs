use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

/// Coarse classification of a [`BrokerError`], used by hosts to pick a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Provisioning,
    Teardown,
    Query,
    Config,
}

#[derive(Debug, ThisError)]
pub enum BrokerError {
    #[error("identifier must be alphanumeric only: {0:?}")]
    InvalidIdentifier(String),

    #[error("binding parameter `{key}` must be a string, got {found}")]
    InvalidParameter { key: String, found: &'static str },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("connection url cannot carry credentials: {0}")]
    InvalidConnectionUrl(String),

    #[error("database name required")]
    MissingDatabase,

    #[error("failed to create role `{role}`: {source}")]
    CreateRole {
        role: String,
        #[source]
        source: SqlxError,
    },

    #[error("failed to drop role `{role}`: {source}")]
    DropRole {
        role: String,
        #[source]
        source: SqlxError,
    },

    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl BrokerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BrokerError::InvalidIdentifier(_)
            | BrokerError::InvalidParameter { .. }
            | BrokerError::InvalidInput(_)
            | BrokerError::InvalidConnectionUrl(_) => ErrorKind::Validation,
            BrokerError::MissingDatabase | BrokerError::CreateRole { .. } => {
                ErrorKind::Provisioning
            }
            BrokerError::DropRole { .. } => ErrorKind::Teardown,
            BrokerError::DatabaseError(_) => ErrorKind::Query,
            BrokerError::Config(_) | BrokerError::UrlParse(_) => ErrorKind::Config,
        }
    }
}

impl From<figment::Error> for BrokerError {
    fn from(e: figment::Error) -> Self {
        BrokerError::Config(Box::new(e))
    }
}
