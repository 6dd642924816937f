use super::records::{fully_qualified, last_cname, lookup_outcome, mx_to_record, txt_to_string};
use async_trait::async_trait;
use dnslookup_application::RecordResolver;
use dnslookup_domain::{LookupError, MxRecord, RecordType};
use hickory_resolver::proto::rr::RecordType as HickoryRecordType;
use hickory_resolver::TokioResolver;
use std::net::IpAddr;
use tracing::debug;

pub struct HickoryRecordResolver {
    resolver: TokioResolver,
}

impl HickoryRecordResolver {
    pub fn new(resolver: TokioResolver) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl RecordResolver for HickoryRecordResolver {
    async fn resolve_addresses(&self, name: &str) -> Result<Vec<IpAddr>, LookupError> {
        let result = self.resolver.lookup_ip(name).await;
        let addresses: Vec<IpAddr> = lookup_outcome(RecordType::A, name, result)?
            .map(|lookup| lookup.iter().collect())
            .unwrap_or_default();

        debug!(domain = %name, count = addresses.len(), "Resolved addresses");
        Ok(addresses)
    }

    /// Like the system resolver, a name without an alias is its own canonical name.
    async fn resolve_canonical_name(&self, name: &str) -> Result<String, LookupError> {
        let result = self.resolver.lookup(name, HickoryRecordType::CNAME).await;
        let canonical = lookup_outcome(RecordType::CNAME, name, result)?
            .and_then(|lookup| last_cname(lookup.iter()))
            .unwrap_or_else(|| fully_qualified(name));

        debug!(domain = %name, canonical = %canonical, "Resolved canonical name");
        Ok(canonical)
    }

    async fn resolve_mail_exchange(&self, name: &str) -> Result<Vec<MxRecord>, LookupError> {
        let result = self.resolver.mx_lookup(name).await;
        let records: Vec<MxRecord> = lookup_outcome(RecordType::MX, name, result)?
            .map(|lookup| lookup.iter().map(mx_to_record).collect())
            .unwrap_or_default();

        debug!(domain = %name, count = records.len(), "Resolved mail exchangers");
        Ok(records)
    }

    async fn resolve_name_servers(&self, name: &str) -> Result<Vec<String>, LookupError> {
        let result = self.resolver.ns_lookup(name).await;
        let names: Vec<String> = lookup_outcome(RecordType::NS, name, result)?
            .map(|lookup| lookup.iter().map(|ns| ns.0.to_utf8()).collect())
            .unwrap_or_default();

        debug!(domain = %name, count = names.len(), "Resolved name servers");
        Ok(names)
    }

    async fn resolve_reverse(&self, address: IpAddr) -> Result<Vec<String>, LookupError> {
        let result = self.resolver.reverse_lookup(address).await;
        let subject = address.to_string();
        let names: Vec<String> = lookup_outcome(RecordType::PTR, &subject, result)?
            .map(|lookup| lookup.iter().map(|ptr| ptr.0.to_utf8()).collect())
            .unwrap_or_default();

        debug!(address = %address, count = names.len(), "Resolved reverse names");
        Ok(names)
    }

    async fn resolve_text(&self, name: &str) -> Result<Vec<String>, LookupError> {
        let result = self.resolver.txt_lookup(name).await;
        let text: Vec<String> = lookup_outcome(RecordType::TXT, name, result)?
            .map(|lookup| lookup.iter().map(txt_to_string).collect())
            .unwrap_or_default();

        debug!(domain = %name, count = text.len(), "Resolved text records");
        Ok(text)
    }
}
