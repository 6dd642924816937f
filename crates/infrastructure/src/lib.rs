//! DNS Lookup Infrastructure Layer
pub mod dns;
