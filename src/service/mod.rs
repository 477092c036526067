pub mod catalog;
pub mod provisioner;
pub mod sanitizer;

pub use catalog::RoleCatalog;
pub use provisioner::CredentialProvisioner;
