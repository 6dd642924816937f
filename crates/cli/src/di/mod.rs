use dnslookup_application::{DomainRecordCache, RecordResolver};
use dnslookup_domain::Config;
use dnslookup_infrastructure::dns::ResolverBuilder;
use std::sync::Arc;

pub struct LookupServices {
    pub resolver: Arc<dyn RecordResolver>,
}

impl LookupServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let resolver = ResolverBuilder::new(config.resolver.clone()).build()?;
        Ok(Self {
            resolver: Arc::new(resolver),
        })
    }

    pub fn cache_for(&self, domain: &str) -> DomainRecordCache {
        DomainRecordCache::new(domain, Arc::clone(&self.resolver))
    }
}
