use dnslookup_domain::{AllRecords, LookupError, MxRecord, RecordSet, RecordType};
use futures::future::join_all;
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, warn};

use super::record_slot::RecordSlot;
use crate::ports::RecordResolver;

type Names = Arc<[Arc<str>]>;

/// Per-domain cache of A, CNAME, MX, NS, PTR and TXT records
///
/// Every kind is resolved at most once per successful lookup and then served
/// from its slot forever. Failed lookups are not cached, so the next call
/// retries. The instance is `Send + Sync`; share it behind an `Arc` and call
/// any accessor from any task.
///
/// Two accessor families are offered:
/// - silent (`addresses`, `canonical_name`, ..., `all_records`): never fail,
///   a failed lookup degrades to an empty value;
/// - checked (`try_addresses`, ..., `try_get`): report
///   [`LookupError::ResolutionFailed`] or [`LookupError::NoDataForKind`].
pub struct DomainRecordCache {
    domain: Arc<str>,
    resolver: Arc<dyn RecordResolver>,
    addresses: RecordSlot<Arc<[IpAddr]>>,
    canonical_name: RecordSlot<Arc<str>>,
    mail_exchange: RecordSlot<Arc<[MxRecord]>>,
    name_servers: RecordSlot<Names>,
    pointers: RecordSlot<Names>,
    text: RecordSlot<Names>,
}

impl DomainRecordCache {
    /// The domain is stored verbatim; normalization is left to the resolver.
    pub fn new(domain: impl Into<Arc<str>>, resolver: Arc<dyn RecordResolver>) -> Self {
        Self {
            domain: domain.into(),
            resolver,
            addresses: RecordSlot::new(),
            canonical_name: RecordSlot::new(),
            mail_exchange: RecordSlot::new(),
            name_servers: RecordSlot::new(),
            pointers: RecordSlot::new(),
            text: RecordSlot::new(),
        }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn is_cached(&self, record_type: RecordType) -> bool {
        match record_type {
            RecordType::A => self.addresses.is_cached(),
            RecordType::CNAME => self.canonical_name.is_cached(),
            RecordType::MX => self.mail_exchange.is_cached(),
            RecordType::NS => self.name_servers.is_cached(),
            RecordType::PTR => self.pointers.is_cached(),
            RecordType::TXT => self.text.is_cached(),
        }
    }

    /// Current slot value without resolving; `None` until a lookup succeeds.
    pub fn cached(&self, record_type: RecordType) -> Option<RecordSet> {
        match record_type {
            RecordType::A => self.addresses.cached().map(RecordSet::Addresses),
            RecordType::CNAME => self.canonical_name.cached().map(RecordSet::CanonicalName),
            RecordType::MX => self.mail_exchange.cached().map(RecordSet::MailExchange),
            RecordType::NS => self.name_servers.cached().map(RecordSet::NameServers),
            RecordType::PTR => self.pointers.cached().map(RecordSet::Pointers),
            RecordType::TXT => self.text.cached().map(RecordSet::Text),
        }
    }

    pub async fn addresses(&self) -> Arc<[IpAddr]> {
        self.fetch_addresses()
            .await
            .unwrap_or_else(|e| self.degrade(e))
    }

    pub async fn canonical_name(&self) -> Arc<str> {
        self.fetch_canonical_name()
            .await
            .unwrap_or_else(|e| self.degrade(e))
    }

    pub async fn mail_exchange(&self) -> Arc<[MxRecord]> {
        self.fetch_mail_exchange()
            .await
            .unwrap_or_else(|e| self.degrade(e))
    }

    pub async fn name_servers(&self) -> Names {
        self.fetch_name_servers()
            .await
            .unwrap_or_else(|e| self.degrade(e))
    }

    /// Reverse names of every address of the domain, in address order.
    pub async fn pointers(&self) -> Names {
        self.fetch_pointers()
            .await
            .unwrap_or_else(|e| self.degrade(e))
    }

    pub async fn text(&self) -> Names {
        self.fetch_text().await.unwrap_or_else(|e| self.degrade(e))
    }

    pub async fn get(&self, record_type: RecordType) -> RecordSet {
        match record_type {
            RecordType::A => RecordSet::Addresses(self.addresses().await),
            RecordType::CNAME => RecordSet::CanonicalName(self.canonical_name().await),
            RecordType::MX => RecordSet::MailExchange(self.mail_exchange().await),
            RecordType::NS => RecordSet::NameServers(self.name_servers().await),
            RecordType::PTR => RecordSet::Pointers(self.pointers().await),
            RecordType::TXT => RecordSet::Text(self.text().await),
        }
    }

    /// Resolve every kind, in A, CNAME, MX, NS, PTR, TXT order.
    ///
    /// Always complete: kinds whose lookup failed come back empty.
    pub async fn all_records(&self) -> AllRecords {
        AllRecords {
            addresses: self.addresses().await,
            canonical_name: self.canonical_name().await,
            mail_exchange: self.mail_exchange().await,
            name_servers: self.name_servers().await,
            pointers: self.pointers().await,
            text: self.text().await,
        }
    }

    pub async fn try_addresses(&self) -> Result<Arc<[IpAddr]>, LookupError> {
        let addresses = self.fetch_addresses().await?;
        if addresses.is_empty() {
            return Err(self.no_data(RecordType::A));
        }
        Ok(addresses)
    }

    pub async fn try_canonical_name(&self) -> Result<Arc<str>, LookupError> {
        let name = self.fetch_canonical_name().await?;
        if name.is_empty() {
            return Err(self.no_data(RecordType::CNAME));
        }
        Ok(name)
    }

    pub async fn try_mail_exchange(&self) -> Result<Arc<[MxRecord]>, LookupError> {
        let records = self.fetch_mail_exchange().await?;
        if records.is_empty() {
            return Err(self.no_data(RecordType::MX));
        }
        Ok(records)
    }

    pub async fn try_name_servers(&self) -> Result<Names, LookupError> {
        let names = self.fetch_name_servers().await?;
        if names.is_empty() {
            return Err(self.no_data(RecordType::NS));
        }
        Ok(names)
    }

    /// Fails with the A-record error when addresses cannot be resolved.
    /// Reverse lookup failures for single addresses are skipped.
    pub async fn try_pointers(&self) -> Result<Names, LookupError> {
        let names = self.fetch_pointers().await?;
        if names.is_empty() {
            return Err(self.no_data(RecordType::PTR));
        }
        Ok(names)
    }

    pub async fn try_text(&self) -> Result<Names, LookupError> {
        let text = self.fetch_text().await?;
        if text.is_empty() {
            return Err(self.no_data(RecordType::TXT));
        }
        Ok(text)
    }

    pub async fn try_get(&self, record_type: RecordType) -> Result<RecordSet, LookupError> {
        match record_type {
            RecordType::A => self.try_addresses().await.map(RecordSet::Addresses),
            RecordType::CNAME => self
                .try_canonical_name()
                .await
                .map(RecordSet::CanonicalName),
            RecordType::MX => self.try_mail_exchange().await.map(RecordSet::MailExchange),
            RecordType::NS => self.try_name_servers().await.map(RecordSet::NameServers),
            RecordType::PTR => self.try_pointers().await.map(RecordSet::Pointers),
            RecordType::TXT => self.try_text().await.map(RecordSet::Text),
        }
    }

    async fn fetch_addresses(&self) -> Result<Arc<[IpAddr]>, LookupError> {
        self.addresses
            .get_or_fill(|| async {
                self.log_miss(RecordType::A);
                self.resolver
                    .resolve_addresses(&self.domain)
                    .await
                    .map(Arc::<[IpAddr]>::from)
            })
            .await
    }

    async fn fetch_canonical_name(&self) -> Result<Arc<str>, LookupError> {
        self.canonical_name
            .get_or_fill(|| async {
                self.log_miss(RecordType::CNAME);
                self.resolver
                    .resolve_canonical_name(&self.domain)
                    .await
                    .map(Arc::<str>::from)
            })
            .await
    }

    async fn fetch_mail_exchange(&self) -> Result<Arc<[MxRecord]>, LookupError> {
        self.mail_exchange
            .get_or_fill(|| async {
                self.log_miss(RecordType::MX);
                self.resolver
                    .resolve_mail_exchange(&self.domain)
                    .await
                    .map(Arc::<[MxRecord]>::from)
            })
            .await
    }

    async fn fetch_name_servers(&self) -> Result<Names, LookupError> {
        self.name_servers
            .get_or_fill(|| async {
                self.log_miss(RecordType::NS);
                self.resolver
                    .resolve_name_servers(&self.domain)
                    .await
                    .map(shared_names)
            })
            .await
    }

    async fn fetch_pointers(&self) -> Result<Names, LookupError> {
        self.pointers
            .get_or_fill(|| async {
                let addresses = self.fetch_addresses().await?;
                self.log_miss(RecordType::PTR);

                let lookups = addresses
                    .iter()
                    .map(|address| self.reverse_lookup(*address));
                let pointers: Names = join_all(lookups).await.into_iter().flatten().collect();

                Ok::<Names, LookupError>(pointers)
            })
            .await
    }

    async fn fetch_text(&self) -> Result<Names, LookupError> {
        self.text
            .get_or_fill(|| async {
                self.log_miss(RecordType::TXT);
                self.resolver
                    .resolve_text(&self.domain)
                    .await
                    .map(shared_names)
            })
            .await
    }

    async fn reverse_lookup(&self, address: IpAddr) -> Vec<Arc<str>> {
        match self.resolver.resolve_reverse(address).await {
            Ok(names) => names.into_iter().map(Arc::from).collect(),
            Err(e) => {
                debug!(
                    domain = %self.domain,
                    address = %address,
                    error = %e,
                    "Reverse lookup failed, skipping address"
                );
                Vec::new()
            }
        }
    }

    fn log_miss(&self, record_type: RecordType) {
        debug!(
            domain = %self.domain,
            record_type = %record_type,
            "Cache MISS, resolving"
        );
    }

    fn no_data(&self, record_type: RecordType) -> LookupError {
        LookupError::no_data(record_type, self.domain.as_ref())
    }

    fn degrade<T: Default>(&self, error: LookupError) -> T {
        warn!(
            domain = %self.domain,
            record_type = %error.record_type(),
            error = %error,
            "Lookup failed, returning empty records"
        );
        T::default()
    }
}

fn shared_names(names: Vec<String>) -> Names {
    names.into_iter().map(Arc::from).collect()
}
