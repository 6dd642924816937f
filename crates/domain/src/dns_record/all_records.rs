use super::{MxRecord, RecordSet, RecordType};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use std::net::IpAddr;
use std::sync::Arc;

/// Every record kind for one domain
///
/// All six kinds are always present; a kind whose lookup failed or found
/// nothing holds an empty value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllRecords {
    pub addresses: Arc<[IpAddr]>,
    pub canonical_name: Arc<str>,
    pub mail_exchange: Arc<[MxRecord]>,
    pub name_servers: Arc<[Arc<str>]>,
    pub pointers: Arc<[Arc<str>]>,
    pub text: Arc<[Arc<str>]>,
}

impl AllRecords {
    pub fn get(&self, record_type: RecordType) -> RecordSet {
        match record_type {
            RecordType::A => RecordSet::Addresses(Arc::clone(&self.addresses)),
            RecordType::CNAME => RecordSet::CanonicalName(Arc::clone(&self.canonical_name)),
            RecordType::MX => RecordSet::MailExchange(Arc::clone(&self.mail_exchange)),
            RecordType::NS => RecordSet::NameServers(Arc::clone(&self.name_servers)),
            RecordType::PTR => RecordSet::Pointers(Arc::clone(&self.pointers)),
            RecordType::TXT => RecordSet::Text(Arc::clone(&self.text)),
        }
    }

    /// `(label, records)` pairs in the fixed aggregate order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, RecordSet)> + '_ {
        RecordType::all()
            .iter()
            .map(move |record_type| (record_type.label(), self.get(*record_type)))
    }

    /// Mapping from label to records, always with exactly six keys.
    pub fn to_map(&self) -> BTreeMap<&'static str, RecordSet> {
        self.iter().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, set)| set.is_empty())
    }
}

impl Serialize for AllRecords {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(RecordType::all().len()))?;
        for (label, set) in self.iter() {
            map.serialize_entry(label, &set)?;
        }
        map.end()
    }
}
