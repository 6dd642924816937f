use super::hickory::HickoryRecordResolver;
use dnslookup_domain::config::{ResolverConfig, UpstreamProvider};
use dnslookup_domain::DomainError;
use hickory_resolver::config::{
    LookupIpStrategy, NameServerConfigGroup, ResolverConfig as HickoryConfig,
};
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::TokioResolver;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::info;

pub struct ResolverBuilder {
    config: ResolverConfig,
}

impl ResolverBuilder {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    pub fn with_upstream(mut self, upstream: UpstreamProvider) -> Self {
        self.config.upstream = upstream;
        self
    }

    pub fn with_nameservers(mut self, nameservers: Vec<String>) -> Self {
        self.config.upstream = UpstreamProvider::Custom;
        self.config.nameservers = nameservers;
        self
    }

    pub fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.config.timeout_ms = timeout_ms;
        self
    }

    pub fn build(self) -> Result<HickoryRecordResolver, DomainError> {
        info!(
            upstream = self.config.upstream.as_str(),
            timeout_ms = self.config.timeout_ms,
            attempts = self.config.attempts,
            "Building DNS resolver"
        );

        let hickory_config = match self.config.upstream {
            UpstreamProvider::System => None,
            UpstreamProvider::Google => Some(HickoryConfig::google()),
            UpstreamProvider::Cloudflare => Some(HickoryConfig::cloudflare()),
            UpstreamProvider::Quad9 => Some(HickoryConfig::quad9()),
            UpstreamProvider::Custom => {
                let nameservers = self
                    .config
                    .nameserver_addrs()
                    .map_err(|e| DomainError::ResolverInit(e.to_string()))?;
                if nameservers.is_empty() {
                    return Err(DomainError::ResolverInit(
                        "Custom upstream requires at least one nameserver".to_string(),
                    ));
                }
                Some(custom_config(&nameservers))
            }
        };

        // `None` reads the host configuration.
        let mut builder = match hickory_config {
            Some(config) => {
                TokioResolver::builder_with_config(config, TokioConnectionProvider::default())
            }
            None => TokioResolver::builder_tokio()
                .map_err(|e| DomainError::ResolverInit(e.to_string()))?,
        };

        let options = builder.options_mut();
        options.timeout = Duration::from_millis(self.config.timeout_ms);
        options.attempts = self.config.attempts;
        options.ip_strategy = LookupIpStrategy::Ipv4AndIpv6;

        info!("DNS resolver built successfully");
        Ok(HickoryRecordResolver::new(builder.build()))
    }
}

/// Plain UDP/TCP name servers, one entry per address so ports may differ.
fn custom_config(nameservers: &[SocketAddr]) -> HickoryConfig {
    let mut group = NameServerConfigGroup::with_capacity(nameservers.len());
    for addr in nameservers {
        group.merge(NameServerConfigGroup::from_ips_clear(
            &[addr.ip()],
            addr.port(),
            true,
        ));
    }
    HickoryConfig::from_parts(None, vec![], group)
}
