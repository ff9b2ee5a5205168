use async_trait::async_trait;
use ferrous_dig_domain::{QueryError, QueryRequest};
use std::time::Duration;

/// What a finished `dig` run left behind. Produced once per execution and
/// consumed by the use case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    pub stdout: String,
    pub stderr: String,
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    /// Set when the lookup deadline expired and the process was killed.
    pub timed_out: bool,
    /// Spawn-to-exit wall-clock time.
    pub elapsed: Duration,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        !self.timed_out && self.exit_code == Some(0)
    }
}

#[async_trait]
pub trait DigExecutor: Send + Sync {
    /// Pre-flight check: is the `dig` program present on this host?
    fn is_available(&self) -> bool;

    /// Runs one lookup to completion or until its deadline expires.
    ///
    /// Only spawn and stream failures are errors here; a non-zero exit or a
    /// timeout is reported through [`ProcessOutput`].
    async fn execute(&self, request: &QueryRequest) -> Result<ProcessOutput, QueryError>;
}
