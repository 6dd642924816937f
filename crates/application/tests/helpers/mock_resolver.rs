#![allow(dead_code)]

use async_trait::async_trait;
use dnslookup_application::RecordResolver;
use dnslookup_domain::{LookupError, MxRecord, RecordType};
use std::collections::{HashMap, VecDeque};
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

fn scripted_failure(record_type: RecordType, name: &str) -> LookupError {
    LookupError::resolution_failed(record_type, name, "SERVFAIL")
}

/// Responses for one record kind: queued one-shot answers first, then the
/// fallback answer forever.
struct Script<T> {
    record_type: RecordType,
    queue: Mutex<VecDeque<Option<T>>>,
    fallback: Option<T>,
    calls: AtomicUsize,
}

impl<T: Clone> Script<T> {
    fn answering(record_type: RecordType, value: T) -> Self {
        Self {
            record_type,
            queue: Mutex::new(VecDeque::new()),
            fallback: Some(value),
            calls: AtomicUsize::new(0),
        }
    }

    fn failing(record_type: RecordType) -> Self {
        Self {
            record_type,
            queue: Mutex::new(VecDeque::new()),
            fallback: None,
            calls: AtomicUsize::new(0),
        }
    }

    fn fail_once(&self) {
        self.queue.lock().unwrap().push_back(None);
    }

    fn next(&self, name: &str) -> Result<T, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let answer = self
            .queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone());
        answer.ok_or_else(|| scripted_failure(self.record_type, name))
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

/// Scripted, invocation-counting resolver
///
/// Every kind answers with an empty result unless configured otherwise.
/// Reverse lookups answer per address; unknown addresses get no names.
pub struct MockRecordResolver {
    addresses: Script<Vec<IpAddr>>,
    canonical_name: Script<String>,
    mail_exchange: Script<Vec<MxRecord>>,
    name_servers: Script<Vec<String>>,
    text: Script<Vec<String>>,
    reverse: HashMap<IpAddr, Option<Vec<String>>>,
    reverse_calls: AtomicUsize,
    queried_names: Mutex<Vec<String>>,
    delay: Option<Duration>,
}

impl MockRecordResolver {
    pub fn new() -> Self {
        Self {
            addresses: Script::answering(RecordType::A, vec![]),
            canonical_name: Script::answering(RecordType::CNAME, String::new()),
            mail_exchange: Script::answering(RecordType::MX, vec![]),
            name_servers: Script::answering(RecordType::NS, vec![]),
            text: Script::answering(RecordType::TXT, vec![]),
            reverse: HashMap::new(),
            reverse_calls: AtomicUsize::new(0),
            queried_names: Mutex::new(Vec::new()),
            delay: None,
        }
    }

    /// Every lookup of every kind fails.
    pub fn failing() -> Self {
        Self {
            addresses: Script::failing(RecordType::A),
            canonical_name: Script::failing(RecordType::CNAME),
            mail_exchange: Script::failing(RecordType::MX),
            name_servers: Script::failing(RecordType::NS),
            text: Script::failing(RecordType::TXT),
            ..Self::new()
        }
    }

    pub fn with_addresses(mut self, addresses: &[&str]) -> Self {
        let parsed = addresses.iter().map(|a| a.parse().unwrap()).collect();
        self.addresses = Script::answering(RecordType::A, parsed);
        self
    }

    pub fn with_canonical_name(mut self, name: &str) -> Self {
        self.canonical_name = Script::answering(RecordType::CNAME, name.to_string());
        self
    }

    pub fn with_mail_exchange(mut self, records: &[(&str, u16)]) -> Self {
        let records = records
            .iter()
            .map(|(exchange, preference)| MxRecord::new(*exchange, *preference))
            .collect();
        self.mail_exchange = Script::answering(RecordType::MX, records);
        self
    }

    pub fn with_name_servers(mut self, names: &[&str]) -> Self {
        self.name_servers = Script::answering(RecordType::NS, to_strings(names));
        self
    }

    pub fn with_text(mut self, text: &[&str]) -> Self {
        self.text = Script::answering(RecordType::TXT, to_strings(text));
        self
    }

    pub fn with_reverse(mut self, address: &str, names: &[&str]) -> Self {
        self.reverse
            .insert(address.parse().unwrap(), Some(to_strings(names)));
        self
    }

    pub fn with_reverse_failure(mut self, address: &str) -> Self {
        self.reverse.insert(address.parse().unwrap(), None);
        self
    }

    /// Sleep before answering, so concurrent callers overlap.
    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay = Some(Duration::from_millis(delay_ms));
        self
    }

    /// The next lookup of `record_type` fails; later ones answer normally.
    pub fn fail_once(self, record_type: RecordType) -> Self {
        match record_type {
            RecordType::A => self.addresses.fail_once(),
            RecordType::CNAME => self.canonical_name.fail_once(),
            RecordType::MX => self.mail_exchange.fail_once(),
            RecordType::NS => self.name_servers.fail_once(),
            RecordType::TXT => self.text.fail_once(),
            RecordType::PTR => panic!("use with_reverse_failure for PTR"),
        }
        self
    }

    /// Resolver invocations for a kind; for PTR, one per reverse lookup.
    pub fn calls(&self, record_type: RecordType) -> usize {
        match record_type {
            RecordType::A => self.addresses.calls(),
            RecordType::CNAME => self.canonical_name.calls(),
            RecordType::MX => self.mail_exchange.calls(),
            RecordType::NS => self.name_servers.calls(),
            RecordType::PTR => self.reverse_calls.load(Ordering::SeqCst),
            RecordType::TXT => self.text.calls(),
        }
    }

    pub fn total_calls(&self) -> usize {
        RecordType::all().iter().map(|t| self.calls(*t)).sum()
    }

    pub fn queried_names(&self) -> Vec<String> {
        self.queried_names.lock().unwrap().clone()
    }

    async fn enter(&self, name: &str) {
        self.queried_names.lock().unwrap().push(name.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for MockRecordResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordResolver for MockRecordResolver {
    async fn resolve_addresses(&self, name: &str) -> Result<Vec<IpAddr>, LookupError> {
        self.enter(name).await;
        self.addresses.next(name)
    }

    async fn resolve_canonical_name(&self, name: &str) -> Result<String, LookupError> {
        self.enter(name).await;
        self.canonical_name.next(name)
    }

    async fn resolve_mail_exchange(&self, name: &str) -> Result<Vec<MxRecord>, LookupError> {
        self.enter(name).await;
        self.mail_exchange.next(name)
    }

    async fn resolve_name_servers(&self, name: &str) -> Result<Vec<String>, LookupError> {
        self.enter(name).await;
        self.name_servers.next(name)
    }

    async fn resolve_reverse(&self, address: IpAddr) -> Result<Vec<String>, LookupError> {
        let name = address.to_string();
        self.enter(&name).await;
        self.reverse_calls.fetch_add(1, Ordering::SeqCst);
        match self.reverse.get(&address) {
            Some(Some(names)) => Ok(names.clone()),
            Some(None) => Err(scripted_failure(RecordType::PTR, &name)),
            None => Ok(vec![]),
        }
    }

    async fn resolve_text(&self, name: &str) -> Result<Vec<String>, LookupError> {
        self.enter(name).await;
        self.text.next(name)
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
