use dnslookup_domain::{LookupError, MxRecord, RecordType};
use hickory_resolver::proto::rr::rdata::{MX, TXT};
use hickory_resolver::proto::rr::RData;
use hickory_resolver::ResolveError;

/// Classify a hickory lookup result.
///
/// `Ok(None)` means the name exists but holds no record of the kind.
/// NXDOMAIN, timeouts and transport errors become `ResolutionFailed`.
pub fn lookup_outcome<T>(
    record_type: RecordType,
    name: &str,
    result: Result<T, ResolveError>,
) -> Result<Option<T>, LookupError> {
    match result {
        Ok(lookup) => Ok(Some(lookup)),
        Err(e) if e.is_nx_domain() => Err(LookupError::resolution_failed(record_type, name, e)),
        Err(e) if e.is_no_records_found() => Ok(None),
        Err(e) => Err(LookupError::resolution_failed(record_type, name, e)),
    }
}

/// Character-strings of one TXT record, concatenated.
pub fn txt_to_string(txt: &TXT) -> String {
    txt.txt_data()
        .iter()
        .map(|part| String::from_utf8_lossy(part))
        .collect()
}

pub fn mx_to_record(mx: &MX) -> MxRecord {
    MxRecord::new(mx.exchange().to_utf8(), mx.preference())
}

/// Target of the last CNAME in an answer, if any.
pub fn last_cname<'a>(answers: impl IntoIterator<Item = &'a RData>) -> Option<String> {
    answers
        .into_iter()
        .filter_map(|rdata| match rdata {
            RData::CNAME(cname) => Some(cname.0.to_utf8()),
            _ => None,
        })
        .last()
}

/// Name with exactly one trailing dot.
pub fn fully_qualified(name: &str) -> String {
    format!("{}.", name.trim_end_matches('.'))
}
