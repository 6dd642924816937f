use dnslookup_domain::{AllRecords, RecordSet};
use std::collections::BTreeMap;

/// One value per line; MX records as `preference exchange`.
pub fn record_lines(set: &RecordSet) -> Vec<String> {
    match set {
        RecordSet::Addresses(addresses) => addresses.iter().map(|ip| ip.to_string()).collect(),
        RecordSet::CanonicalName(name) if name.is_empty() => Vec::new(),
        RecordSet::CanonicalName(name) => vec![name.to_string()],
        RecordSet::MailExchange(records) => records
            .iter()
            .map(|mx| format!("{} {}", mx.preference, mx.exchange))
            .collect(),
        RecordSet::NameServers(names) | RecordSet::Pointers(names) | RecordSet::Text(names) => {
            names.iter().map(|name| name.to_string()).collect()
        }
    }
}

pub fn render_text(set: &RecordSet) -> String {
    record_lines(set).join("\n")
}

/// One section per kind, headed by its label, in aggregate order.
pub fn render_all_text(all: &AllRecords) -> String {
    all.iter()
        .map(|(label, set)| {
            let mut section = format!("{label}:");
            for line in record_lines(&set) {
                section.push_str("\n  ");
                section.push_str(&line);
            }
            section
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_json(set: &RecordSet) -> serde_json::Result<String> {
    let keyed = BTreeMap::from([(set.record_type().label(), set)]);
    serde_json::to_string_pretty(&keyed)
}

pub fn render_all_json(all: &AllRecords) -> serde_json::Result<String> {
    serde_json::to_string_pretty(all)
}
