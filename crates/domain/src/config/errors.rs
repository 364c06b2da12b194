use crate::address::{Address, AddressFamily};

/// Validation failures raised while normalizing a DNS configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("not an {expected} address: {address}")]
    InvalidAddressFamily {
        address: Address,
        expected: AddressFamily,
    },

    #[error("domain is not expected in DNS hosts: {0}")]
    UnexpectedDomainValue(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    FileRead(String, String),

    #[error("Failed to write config file {0}: {1}")]
    FileWrite(String, String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Configuration validation error: {0}")]
    Validation(String),

    #[error("Invalid DNS configuration: {0}")]
    Build(#[from] BuildError),
}
