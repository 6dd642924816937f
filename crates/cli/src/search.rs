use dnslookup_domain::{validate_domain_name, DomainError, RecordType};
use std::str::FromStr;

pub const USAGE: &str =
    "error: -domain and -s parameters required. usage: dnslookup --domain example.net -s all";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    All,
    Kind(RecordType),
}

impl FromStr for SearchType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(SearchType::All);
        }
        s.parse::<RecordType>()
            .map(SearchType::Kind)
            .map_err(DomainError::InvalidRecordType)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub domain: String,
    pub search: SearchType,
}

impl LookupRequest {
    pub fn from_args(
        domain: Option<&str>,
        search_type: Option<&str>,
    ) -> Result<Self, DomainError> {
        let domain = domain
            .ok_or(DomainError::MissingArgument("domain"))?
            .trim();
        validate_domain_name(domain)?;

        let search = search_type
            .ok_or(DomainError::MissingArgument("search type"))?
            .trim()
            .parse()?;

        Ok(Self {
            domain: domain.to_string(),
            search,
        })
    }
}
