use crate::dns_record::RecordType;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid record type: {0}")]
    InvalidRecordType(String),

    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),

    #[error("Resolver initialization failed: {0}")]
    ResolverInit(String),
}

/// Why a record slot could not be served
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The resolver failed: NXDOMAIN, timeout, network or malformed response.
    #[error("{record_type} lookup for {name} failed: {reason}")]
    ResolutionFailed {
        record_type: RecordType,
        name: String,
        reason: String,
    },

    /// The resolver answered, but with zero records of this kind.
    #[error("No {record_type} records for {name}")]
    NoDataForKind { record_type: RecordType, name: String },
}

impl LookupError {
    pub fn resolution_failed(
        record_type: RecordType,
        name: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        LookupError::ResolutionFailed {
            record_type,
            name: name.into(),
            reason: reason.to_string(),
        }
    }

    pub fn no_data(record_type: RecordType, name: impl Into<String>) -> Self {
        LookupError::NoDataForKind {
            record_type,
            name: name.into(),
        }
    }

    pub fn record_type(&self) -> RecordType {
        match self {
            LookupError::ResolutionFailed { record_type, .. }
            | LookupError::NoDataForKind { record_type, .. } => *record_type,
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, LookupError::NoDataForKind { .. })
    }
}
