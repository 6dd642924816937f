use dnslookup_domain::config::{ResolverConfig, UpstreamProvider};

pub struct ResolverConfigBuilder;

impl ResolverConfigBuilder {
    pub fn provider(upstream: UpstreamProvider) -> ResolverConfig {
        ResolverConfig {
            upstream,
            ..ResolverConfig::default()
        }
    }

    pub fn custom(nameservers: &[&str]) -> ResolverConfig {
        ResolverConfig {
            upstream: UpstreamProvider::Custom,
            nameservers: nameservers.iter().map(|s| s.to_string()).collect(),
            ..ResolverConfig::default()
        }
    }

    pub fn google_fast() -> ResolverConfig {
        ResolverConfig {
            upstream: UpstreamProvider::Google,
            timeout_ms: 2000,
            attempts: 1,
            ..ResolverConfig::default()
        }
    }
}
