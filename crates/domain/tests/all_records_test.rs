use dnslookup_domain::{AllRecords, MxRecord, RecordSet, RecordType};
use std::net::IpAddr;
use std::sync::Arc;

fn names(values: &[&str]) -> Arc<[Arc<str>]> {
    values.iter().map(|v| Arc::from(*v)).collect()
}

fn empty_records() -> AllRecords {
    AllRecords {
        addresses: Arc::from([]),
        canonical_name: Arc::from(""),
        mail_exchange: Arc::from([]),
        name_servers: names(&[]),
        pointers: names(&[]),
        text: names(&[]),
    }
}

fn sample_records() -> AllRecords {
    let v4: IpAddr = "192.0.2.1".parse().unwrap();
    let v6: IpAddr = "2001:db8::1".parse().unwrap();
    AllRecords {
        addresses: Arc::from(vec![v4, v6]),
        canonical_name: Arc::from("example.net."),
        mail_exchange: Arc::from(vec![MxRecord::new("mail.example.net.", 10)]),
        name_servers: names(&["ns1.example.net.", "ns2.example.net."]),
        pointers: names(&["host.example.net."]),
        text: names(&["v=spf1 -all"]),
    }
}

// ============================================================================
// RecordSet
// ============================================================================

#[test]
fn test_empty_record_set_per_kind() {
    for record_type in RecordType::all() {
        let set = RecordSet::empty(*record_type);
        assert_eq!(set.record_type(), *record_type);
        assert!(set.is_empty());
    }
}

#[test]
fn test_canonical_name_counts_as_one() {
    assert_eq!(RecordSet::CanonicalName(Arc::from("a.example.")).len(), 1);
    assert_eq!(RecordSet::CanonicalName(Arc::from("")).len(), 0);
}

#[test]
fn test_record_set_serializes_untagged() {
    let set = RecordSet::MailExchange(Arc::from(vec![MxRecord::new("mx.example.", 5)]));
    let value = serde_json::to_value(&set).unwrap();
    assert_eq!(value[0]["exchange"], "mx.example.");
    assert_eq!(value[0]["preference"], 5);
}

// ============================================================================
// AllRecords
// ============================================================================

#[test]
fn test_iter_yields_six_labels_in_order() {
    let records = sample_records();
    let labels: Vec<&str> = records.iter().map(|(label, _)| label).collect();
    let expected: Vec<&str> = RecordType::all().iter().map(|rt| rt.label()).collect();
    assert_eq!(labels, expected);
}

#[test]
fn test_empty_aggregate_still_has_six_keys() {
    let records = empty_records();
    assert!(records.is_empty());
    assert_eq!(records.to_map().len(), 6);
}

#[test]
fn test_get_shares_allocation() {
    let records = sample_records();
    match records.get(RecordType::A) {
        RecordSet::Addresses(addresses) => assert!(Arc::ptr_eq(&addresses, &records.addresses)),
        other => panic!("unexpected set {:?}", other),
    }
}

#[test]
fn test_serializes_as_object_keyed_by_label() {
    let value = serde_json::to_value(sample_records()).unwrap();
    let object = value.as_object().unwrap();

    assert_eq!(object.len(), 6);
    assert_eq!(value["A records"][1], "2001:db8::1");
    assert_eq!(value["CNAME records"], "example.net.");
    assert_eq!(value["NS records"][0], "ns1.example.net.");
    assert_eq!(value["TXT records"][0], "v=spf1 -all");
}
