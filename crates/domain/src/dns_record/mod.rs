pub mod all_records;
pub mod record;
pub mod record_type;

pub use all_records::AllRecords;
pub use record::{MxRecord, RecordSet};
pub use record_type::RecordType;
