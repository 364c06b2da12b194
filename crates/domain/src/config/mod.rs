//! Configuration module for dnsconf
//!
//! - `root`: Main configuration and CLI overrides
//! - `dns`: Raw DNS section and the builder that normalizes it
//! - `normalized`: Resolver-facing DNS configuration
//! - `logging`: Logging settings
//! - `output`: Output formatting
//! - `errors`: Build and configuration errors

pub mod dns;
pub mod errors;
pub mod logging;
pub mod normalized;
pub mod output;
pub mod root;

pub use dns::{HostKey, RawDnsConfig, DEFAULT_DNS_PORT, SUBDOMAIN_KEY_PREFIX};
pub use errors::{BuildError, ConfigError};
pub use logging::LoggingConfig;
pub use normalized::{
    ClientIp, DomainMatchType, Endpoint, HostMapping, Network, NormalizedDnsConfig,
};
pub use output::OutputConfig;
pub use root::{CliOverrides, Config};
