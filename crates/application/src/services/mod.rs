mod domain_record_cache;
mod record_slot;

pub use domain_record_cache::DomainRecordCache;
pub use record_slot::RecordSlot;
