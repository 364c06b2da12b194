pub mod builders;

pub use builders::RawDnsConfigBuilder;
