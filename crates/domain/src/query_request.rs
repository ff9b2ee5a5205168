use crate::dns_record::RecordType;
use crate::errors::QueryError;
use crate::validators::{validate_domain, validate_server};
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_SERVER: &str = "8.8.8.8";
pub const DEFAULT_TIMEOUT_SECS: i64 = 10;

/// Policy ceiling for a single lookup. Larger values are clamped, not rejected.
pub const MAX_TIMEOUT_SECS: u64 = 30;

/// A lookup that has passed validation. The only way to build one is
/// [`QueryRequest::new`], so holders can rely on every field being well formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    domain: Arc<str>,
    record_type: RecordType,
    server: IpAddr,
    timeout_secs: u64,
}

impl QueryRequest {
    /// Validates in a fixed order: record type, domain, server, timeout.
    pub fn new(
        domain: &str,
        record_type: &str,
        server: &str,
        timeout_secs: i64,
    ) -> Result<Self, QueryError> {
        let record_type: RecordType = record_type.parse().map_err(QueryError::InvalidArgument)?;
        validate_domain(domain).map_err(QueryError::InvalidArgument)?;
        let server = validate_server(server).map_err(QueryError::InvalidArgument)?;
        let timeout_secs = Self::effective_timeout(timeout_secs)?;

        Ok(Self {
            domain: domain.into(),
            record_type,
            server,
            timeout_secs,
        })
    }

    fn effective_timeout(requested: i64) -> Result<u64, QueryError> {
        if requested <= 0 {
            return Err(QueryError::InvalidArgument(format!(
                "Timeout must be a positive number of seconds, got {}",
                requested
            )));
        }

        let requested = requested as u64;
        if requested > MAX_TIMEOUT_SECS {
            debug!(
                requested,
                max = MAX_TIMEOUT_SECS,
                "Clamping lookup timeout to policy ceiling"
            );
            return Ok(MAX_TIMEOUT_SECS);
        }
        Ok(requested)
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn record_type(&self) -> RecordType {
        self.record_type
    }

    pub fn server(&self) -> IpAddr {
        self.server
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
