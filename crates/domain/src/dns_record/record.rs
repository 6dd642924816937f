use super::RecordType;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::sync::Arc;

/// Mail exchange host and its preference (lower is preferred)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MxRecord {
    pub exchange: Arc<str>,
    pub preference: u16,
}

impl MxRecord {
    pub fn new(exchange: impl Into<Arc<str>>, preference: u16) -> Self {
        Self {
            exchange: exchange.into(),
            preference,
        }
    }
}

/// Cached value of one record slot, tagged with its kind
///
/// Values are shared `Arc` slices, so cloning a set never copies records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RecordSet {
    Addresses(Arc<[IpAddr]>),
    CanonicalName(Arc<str>),
    MailExchange(Arc<[MxRecord]>),
    NameServers(Arc<[Arc<str>]>),
    Pointers(Arc<[Arc<str>]>),
    Text(Arc<[Arc<str>]>),
}

impl RecordSet {
    /// Empty value for a kind, returned when a lookup yields nothing.
    pub fn empty(record_type: RecordType) -> Self {
        match record_type {
            RecordType::A => RecordSet::Addresses(Arc::from([])),
            RecordType::CNAME => RecordSet::CanonicalName(Arc::from("")),
            RecordType::MX => RecordSet::MailExchange(Arc::from([])),
            RecordType::NS => RecordSet::NameServers(Arc::from([])),
            RecordType::PTR => RecordSet::Pointers(Arc::from([])),
            RecordType::TXT => RecordSet::Text(Arc::from([])),
        }
    }

    pub fn record_type(&self) -> RecordType {
        match self {
            RecordSet::Addresses(_) => RecordType::A,
            RecordSet::CanonicalName(_) => RecordType::CNAME,
            RecordSet::MailExchange(_) => RecordType::MX,
            RecordSet::NameServers(_) => RecordType::NS,
            RecordSet::Pointers(_) => RecordType::PTR,
            RecordSet::Text(_) => RecordType::TXT,
        }
    }

    /// Number of records; a canonical name counts as one unless empty.
    pub fn len(&self) -> usize {
        match self {
            RecordSet::Addresses(v) => v.len(),
            RecordSet::CanonicalName(name) => usize::from(!name.is_empty()),
            RecordSet::MailExchange(v) => v.len(),
            RecordSet::NameServers(v) | RecordSet::Pointers(v) | RecordSet::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
