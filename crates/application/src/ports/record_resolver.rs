use async_trait::async_trait;
use dnslookup_domain::{LookupError, MxRecord};
use std::net::IpAddr;

/// Network resolution capability consumed by the record cache
///
/// Implementations report "answered with zero records" as `Ok` with an
/// empty value; every other failure is a [`LookupError::ResolutionFailed`].
#[async_trait]
pub trait RecordResolver: Send + Sync {
    async fn resolve_addresses(&self, name: &str) -> Result<Vec<IpAddr>, LookupError>;

    async fn resolve_canonical_name(&self, name: &str) -> Result<String, LookupError>;

    async fn resolve_mail_exchange(&self, name: &str) -> Result<Vec<MxRecord>, LookupError>;

    async fn resolve_name_servers(&self, name: &str) -> Result<Vec<String>, LookupError>;

    async fn resolve_reverse(&self, address: IpAddr) -> Result<Vec<String>, LookupError>;

    async fn resolve_text(&self, name: &str) -> Result<Vec<String>, LookupError>;
}
