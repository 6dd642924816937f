//! Production [`RecordResolver`](dnslookup_application::RecordResolver)
//! backed by `hickory-resolver`
//!
//! - **builder**: upstream selection, timeout and attempts from configuration
//! - **hickory**: the port implementation
//! - **records**: conversion from hickory record data and errors

pub mod builder;
pub mod hickory;
pub mod records;

pub use builder::ResolverBuilder;
pub use hickory::HickoryRecordResolver;
