use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use super::errors::BuildError;
use super::normalized::{
    ClientIp, DomainMatchType, Endpoint, HostMapping, Network, NormalizedDnsConfig,
};
use crate::address::{Address, AddressFamily};

/// Port used for every configured name server.
pub const DEFAULT_DNS_PORT: u16 = 53;

/// Host key prefix selecting subdomain matching, e.g. `"domain:example.com"`.
pub const SUBDOMAIN_KEY_PREFIX: &str = "domain:";

/// Typed view of a `hosts` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostKey<'a> {
    pub domain: &'a str,
    pub match_type: DomainMatchType,
}

impl<'a> HostKey<'a> {
    /// Classifies a raw key. Keys are taken verbatim: no case folding, no IDN decoding.
    ///
    /// # Examples
    /// ```
    /// use dnsconf_domain::config::{DomainMatchType, HostKey};
    ///
    /// let key = HostKey::parse("domain:example.com");
    /// assert_eq!(key.domain, "example.com");
    /// assert_eq!(key.match_type, DomainMatchType::SubDomain);
    ///
    /// let key = HostKey::parse("example.com");
    /// assert_eq!(key.match_type, DomainMatchType::Full);
    /// ```
    pub fn parse(key: &'a str) -> Self {
        match key.strip_prefix(SUBDOMAIN_KEY_PREFIX) {
            Some(domain) => Self {
                domain,
                match_type: DomainMatchType::SubDomain,
            },
            None => Self {
                domain: key,
                match_type: DomainMatchType::Full,
            },
        }
    }
}

/// DNS section as written by the user.
///
/// `hosts` is an ordered map so that `static_hosts` follows file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawDnsConfig {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub servers: Vec<Address>,

    #[serde(default, rename = "clientIp", skip_serializing_if = "Option::is_none")]
    pub client_v4: Option<Address>,

    #[serde(default, rename = "clientIp6", skip_serializing_if = "Option::is_none")]
    pub client_v6: Option<Address>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hosts: Option<IndexMap<String, Address>>,
}

impl RawDnsConfig {
    /// Validates and normalizes this configuration for the resolver.
    ///
    /// Fails when a client IP override has the wrong family or when a host
    /// maps to a domain instead of an IP. No partial output is returned.
    pub fn build(&self) -> Result<NormalizedDnsConfig, BuildError> {
        let mut config = NormalizedDnsConfig::default();

        if let Some(v4) = &self.client_v4 {
            let octets = match v4 {
                Address::Ipv4(ip) => ip.octets(),
                other => return Err(family_error(other, AddressFamily::Ipv4)),
            };
            config.client_ip.get_or_insert_with(ClientIp::default).v4 = Some(octets);
        }

        if let Some(v6) = &self.client_v6 {
            let octets = match v6 {
                Address::Ipv6(ip) => ip.octets(),
                other => return Err(family_error(other, AddressFamily::Ipv6)),
            };
            config.client_ip.get_or_insert_with(ClientIp::default).v6 = Some(octets);
        }

        config.name_servers = self
            .servers
            .iter()
            .map(|server| Endpoint {
                network: Network::Udp,
                address: server.clone(),
                port: DEFAULT_DNS_PORT,
            })
            .collect();

        if let Some(hosts) = &self.hosts {
            config.static_hosts.reserve(hosts.len());

            for (key, value) in hosts {
                let ip = match value.ip_bytes() {
                    Some(bytes) => bytes,
                    None => {
                        return Err(BuildError::UnexpectedDomainValue(value.to_string()));
                    }
                };

                let key = HostKey::parse(key);
                config.static_hosts.push(HostMapping {
                    domain: key.domain.to_string(),
                    ip: vec![ip],
                    match_type: key.match_type,
                });
            }
        }

        Ok(config)
    }
}

/// `"servers": null` reads as an empty list.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Address>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Address>>::deserialize(deserializer)?.unwrap_or_default())
}

fn family_error(address: &Address, expected: AddressFamily) -> BuildError {
    BuildError::InvalidAddressFamily {
        address: address.clone(),
        expected,
    }
}
