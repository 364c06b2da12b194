//! dnsconf Domain Layer
pub mod address;
pub mod config;

pub use address::{Address, AddressFamily};
pub use config::{
    BuildError, CliOverrides, ClientIp, Config, ConfigError, DomainMatchType, Endpoint,
    HostMapping, Network, NormalizedDnsConfig, RawDnsConfig,
};
