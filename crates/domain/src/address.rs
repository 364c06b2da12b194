use std::convert::Infallible;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Address family of an [`Address`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    Ipv4,
    Ipv6,
    Domain,
}

impl AddressFamily {
    pub fn is_ip(&self) -> bool {
        matches!(self, Self::Ipv4 | Self::Ipv6)
    }

    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ipv4 => "IPv4",
            Self::Ipv6 => "IPv6",
            Self::Domain => "domain",
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A network address as written in configuration: an IP literal or a domain name.
///
/// Parsing never fails. Anything that is not an IP literal is kept verbatim
/// as a domain, so validation of the family is left to the consumer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Address {
    Ipv4(Ipv4Addr),
    Ipv6(Ipv6Addr),
    Domain(String),
}

impl Address {
    /// Parses an address string.
    ///
    /// - `"[2001:db8::1]"` has its brackets stripped before IP parsing
    /// - `"::ffff:1.2.3.4"` collapses to the IPv4 address `1.2.3.4`
    /// - anything else that is not an IP literal becomes a domain
    ///
    /// # Examples
    /// ```
    /// use dnsconf_domain::{Address, AddressFamily};
    ///
    /// assert_eq!(Address::parse("8.8.8.8").family(), AddressFamily::Ipv4);
    /// assert_eq!(Address::parse("[::1]").family(), AddressFamily::Ipv6);
    /// assert_eq!(Address::parse("dns.google").domain(), Some("dns.google"));
    /// ```
    pub fn parse(s: &str) -> Self {
        let candidate = s
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .filter(|inner| !inner.is_empty())
            .unwrap_or(s);

        match candidate.parse::<IpAddr>() {
            Ok(ip) => Self::from(ip),
            Err(_) => Self::Domain(s.to_string()),
        }
    }

    pub fn family(&self) -> AddressFamily {
        match self {
            Self::Ipv4(_) => AddressFamily::Ipv4,
            Self::Ipv6(_) => AddressFamily::Ipv6,
            Self::Domain(_) => AddressFamily::Domain,
        }
    }

    pub fn ip(&self) -> Option<IpAddr> {
        match self {
            Self::Ipv4(ip) => Some(IpAddr::V4(*ip)),
            Self::Ipv6(ip) => Some(IpAddr::V6(*ip)),
            Self::Domain(_) => None,
        }
    }

    /// Raw network-order bytes: 4 for IPv4, 16 for IPv6, `None` for domains.
    pub fn ip_bytes(&self) -> Option<Vec<u8>> {
        match self {
            Self::Ipv4(ip) => Some(ip.octets().to_vec()),
            Self::Ipv6(ip) => Some(ip.octets().to_vec()),
            Self::Domain(_) => None,
        }
    }

    pub fn domain(&self) -> Option<&str> {
        match self {
            Self::Domain(domain) => Some(domain),
            _ => None,
        }
    }
}

impl From<IpAddr> for Address {
    fn from(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(v4) => Self::Ipv4(v4),
            IpAddr::V6(v6) => Self::from(v6),
        }
    }
}

impl From<Ipv4Addr> for Address {
    fn from(ip: Ipv4Addr) -> Self {
        Self::Ipv4(ip)
    }
}

impl From<Ipv6Addr> for Address {
    fn from(ip: Ipv6Addr) -> Self {
        match ip.to_ipv4_mapped() {
            Some(v4) => Self::Ipv4(v4),
            None => Self::Ipv6(ip),
        }
    }
}

impl FromStr for Address {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ipv4(ip) => write!(f, "{}", ip),
            Self::Ipv6(ip) => write!(f, "{}", ip),
            Self::Domain(domain) => f.write_str(domain),
        }
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}
