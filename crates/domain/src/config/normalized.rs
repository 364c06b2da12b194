use serde::Serialize;

use crate::address::Address;

/// Transport protocol of a name server endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Tcp,
    Udp,
}

/// A (network, address, port) triple identifying a reachable name server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    pub network: Network,
    pub address: Address,
    pub port: u16,
}

/// Client address hints forwarded to upstream servers, one per IP version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClientIp {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v4: Option<[u8; 4]>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub v6: Option<[u8; 16]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DomainMatchType {
    /// Exact domain only.
    Full,
    /// The domain and all of its subdomains.
    SubDomain,
}

/// Static override resolving a domain (or domain suffix) to fixed IPs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostMapping {
    pub domain: String,

    /// Raw network-order IP bytes, never empty.
    pub ip: Vec<Vec<u8>>,

    pub match_type: DomainMatchType,
}

impl HostMapping {
    /// Whether `query` is answered by this mapping. Comparison is verbatim.
    pub fn matches(&self, query: &str) -> bool {
        match self.match_type {
            DomainMatchType::Full => query == self.domain,
            DomainMatchType::SubDomain => {
                query == self.domain
                    || query
                        .strip_suffix(self.domain.as_str())
                        .is_some_and(|prefix| prefix.ends_with('.'))
            }
        }
    }
}

/// Resolver-ready DNS configuration produced by [`RawDnsConfig::build`].
///
/// [`RawDnsConfig::build`]: super::dns::RawDnsConfig::build
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizedDnsConfig {
    pub name_servers: Vec<Endpoint>,

    pub client_ip: Option<ClientIp>,

    pub static_hosts: Vec<HostMapping>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(domain: &str, match_type: DomainMatchType) -> HostMapping {
        HostMapping {
            domain: domain.to_string(),
            ip: vec![vec![1, 2, 3, 4]],
            match_type,
        }
    }

    #[test]
    fn test_full_match_is_exact() {
        let m = mapping("example.com", DomainMatchType::Full);
        assert!(m.matches("example.com"));
        assert!(!m.matches("www.example.com"));
    }

    #[test]
    fn test_subdomain_match() {
        let m = mapping("example.com", DomainMatchType::SubDomain);
        assert!(m.matches("example.com"));
        assert!(m.matches("www.example.com"));
        assert!(m.matches("a.b.example.com"));
        assert!(!m.matches("notexample.com"));
        assert!(!m.matches("example.org"));
    }
}
