pub mod binding;
pub mod credential;

pub use binding::BindingParameters;
pub use credential::CredentialRecord;
