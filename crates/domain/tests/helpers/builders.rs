#![allow(dead_code)]
use dnsconf_domain::{Address, RawDnsConfig};
use indexmap::IndexMap;

pub struct RawDnsConfigBuilder {
    servers: Vec<Address>,
    hosts: Option<IndexMap<String, Address>>,
    client_v4: Option<Address>,
    client_v6: Option<Address>,
}

impl RawDnsConfigBuilder {
    pub fn new() -> Self {
        Self {
            servers: Vec::new(),
            hosts: None,
            client_v4: None,
            client_v6: None,
        }
    }

    pub fn server(mut self, addr: &str) -> Self {
        self.servers.push(Address::parse(addr));
        self
    }

    pub fn host(mut self, key: &str, value: &str) -> Self {
        self.hosts
            .get_or_insert_with(IndexMap::new)
            .insert(key.to_string(), Address::parse(value));
        self
    }

    pub fn empty_hosts(mut self) -> Self {
        self.hosts = Some(IndexMap::new());
        self
    }

    pub fn client_v4(mut self, addr: &str) -> Self {
        self.client_v4 = Some(Address::parse(addr));
        self
    }

    pub fn client_v6(mut self, addr: &str) -> Self {
        self.client_v6 = Some(Address::parse(addr));
        self
    }

    pub fn build(self) -> RawDnsConfig {
        RawDnsConfig {
            servers: self.servers,
            hosts: self.hosts,
            client_v4: self.client_v4,
            client_v6: self.client_v6,
        }
    }
}

impl Default for RawDnsConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
