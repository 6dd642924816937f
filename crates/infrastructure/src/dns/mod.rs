pub mod resolver;

pub use resolver::{HickoryRecordResolver, ResolverBuilder};
