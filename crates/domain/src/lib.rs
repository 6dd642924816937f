//! DNS Lookup Domain Layer
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod validators;

pub use config::{CliOverrides, Config, ConfigError, UpstreamProvider};
pub use dns_record::{AllRecords, MxRecord, RecordSet, RecordType};
pub use errors::{DomainError, LookupError};
pub use validators::validate_domain_name;
