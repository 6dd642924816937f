//! Configuration module for DNS Lookup
//!
//! - `root`: Main configuration and CLI overrides
//! - `resolver`: Upstream selection, timeouts and attempts
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolver::{ResolverConfig, UpstreamProvider};
pub use root::{CliOverrides, Config};
