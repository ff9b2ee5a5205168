//! Ferrous Dig Domain Layer
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod query_request;
pub mod query_result;
pub mod validators;

pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, LookupConfig, TimeoutMode};
pub use dns_record::{parse_answer_line, parse_answer_section, DnsRecord, RecordType};
pub use errors::QueryError;
pub use query_request::{QueryRequest, DEFAULT_SERVER, DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS};
pub use query_result::QueryResult;
