//! DNS Lookup Application Layer
pub mod ports;
pub mod services;

pub use ports::RecordResolver;
pub use services::{DomainRecordCache, RecordSlot};
