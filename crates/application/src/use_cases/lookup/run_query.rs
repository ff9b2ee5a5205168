use crate::ports::{DigExecutor, ProcessOutput};
use ferrous_dig_domain::{
    LookupConfig, QueryError, QueryRequest, QueryResult, DEFAULT_SERVER, DEFAULT_TIMEOUT_SECS,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Caller-supplied lookup arguments, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryArgs {
    pub domain: String,
    pub record_type: String,
    /// Falls back to the use case default when `None`.
    pub server: Option<String>,
    /// Falls back to the use case default when `None`.
    pub timeout_secs: Option<i64>,
}

impl QueryArgs {
    pub fn new(domain: impl Into<String>, record_type: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            record_type: record_type.into(),
            server: None,
            timeout_secs: None,
        }
    }

    pub fn server(mut self, server: impl Into<String>) -> Self {
        self.server = Some(server.into());
        self
    }

    pub fn timeout_secs(mut self, timeout_secs: i64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }
}

pub struct RunQueryUseCase {
    executor: Arc<dyn DigExecutor>,
    default_server: String,
    default_timeout_secs: i64,
}

impl RunQueryUseCase {
    pub fn new(executor: Arc<dyn DigExecutor>) -> Self {
        Self {
            executor,
            default_server: DEFAULT_SERVER.to_string(),
            default_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn with_defaults(executor: Arc<dyn DigExecutor>, config: &LookupConfig) -> Self {
        Self {
            executor,
            default_server: config.default_server.clone(),
            default_timeout_secs: config.default_timeout_secs,
        }
    }

    /// validate -> preflight -> execute -> parse. Exactly one attempt, no retries.
    pub async fn execute(&self, args: &QueryArgs) -> Result<QueryResult, QueryError> {
        let request = QueryRequest::new(
            &args.domain,
            &args.record_type,
            args.server.as_deref().unwrap_or(&self.default_server),
            args.timeout_secs.unwrap_or(self.default_timeout_secs),
        )?;

        debug!(
            domain = %request.domain(),
            record_type = %request.record_type(),
            server = %request.server(),
            timeout_secs = request.timeout_secs(),
            "Running dig lookup"
        );

        if !self.executor.is_available() {
            warn!("dig executable not found on PATH");
            return Err(QueryError::Unavailable(
                "dig executable not found on PATH".to_string(),
            ));
        }

        let output = self.executor.execute(&request).await?;

        if let Err(e) = Self::check_status(&request, &output) {
            warn!(
                domain = %request.domain(),
                record_type = %request.record_type(),
                exit_code = ?output.exit_code,
                timed_out = output.timed_out,
                error = %e,
                "dig lookup failed"
            );
            return Err(e);
        }

        let result = QueryResult::from_output(output.stdout, output.elapsed);

        info!(
            domain = %request.domain(),
            record_type = %request.record_type(),
            records = result.records.len(),
            execution_time_ms = %result.execution_time_ms,
            "dig lookup completed"
        );

        Ok(result)
    }

    fn check_status(request: &QueryRequest, output: &ProcessOutput) -> Result<(), QueryError> {
        if output.timed_out {
            return Err(QueryError::ExecutionFailed(format!(
                "dig timed out after {} seconds",
                request.timeout_secs()
            )));
        }

        if output.success() {
            return Ok(());
        }

        // dig writes some failures (e.g. "no servers could be reached") to stdout
        let detail = match output.stderr.trim() {
            "" => output.stdout.trim(),
            stderr => stderr,
        };

        let message = match output.exit_code {
            Some(code) => format!("dig exited with status {}: {}", code, detail),
            None => format!("dig was terminated by a signal: {}", detail),
        };
        Err(QueryError::ExecutionFailed(message))
    }
}
