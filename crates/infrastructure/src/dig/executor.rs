use super::command::build_command;
use super::timeout::TimeoutEnforcement;
use crate::system::find_executable;
use async_trait::async_trait;
use ferrous_dig_application::ports::{DigExecutor, ProcessOutput};
use ferrous_dig_domain::{ConfigError, LookupConfig, QueryError, QueryRequest};
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Child;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// How long to keep draining pipes after dig's process group is gone. Only a
/// descendant that left the group can still hold them open.
const PIPE_DRAIN_GRACE: Duration = Duration::from_secs(1);

/// Runs the real `dig` binary as a child process.
pub struct DigProcessExecutor {
    dig_program: PathBuf,
    enforcement: TimeoutEnforcement,
}

impl DigProcessExecutor {
    pub fn new(dig_program: impl Into<PathBuf>, enforcement: TimeoutEnforcement) -> Self {
        Self {
            dig_program: dig_program.into(),
            enforcement,
        }
    }

    pub fn from_config(config: &LookupConfig) -> Result<Self, ConfigError> {
        let enforcement = TimeoutEnforcement::detect(config.timeout_mode)?;
        Ok(Self::new(&config.dig_path, enforcement))
    }

    pub fn enforcement(&self) -> &TimeoutEnforcement {
        &self.enforcement
    }

    fn resolve_dig(&self) -> Option<PathBuf> {
        find_executable(&self.dig_program)
    }

    fn spawn_error(&self, dig: &Path, e: io::Error) -> QueryError {
        match e.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
                QueryError::Unavailable(format!("cannot run {}: {}", dig.display(), e))
            }
            _ => QueryError::ExecutionFailed(format!(
                "failed to spawn {}: {}",
                dig.display(),
                e
            )),
        }
    }
}

#[async_trait]
impl DigExecutor for DigProcessExecutor {
    fn is_available(&self) -> bool {
        self.resolve_dig().is_some()
    }

    async fn execute(&self, request: &QueryRequest) -> Result<ProcessOutput, QueryError> {
        let dig = self.resolve_dig().ok_or_else(|| {
            QueryError::Unavailable(format!(
                "{} not found on PATH",
                self.dig_program.display()
            ))
        })?;

        let mut command = build_command(&dig, &self.enforcement, request);
        debug!(
            program = ?command.as_std().get_program(),
            args = ?command.as_std().get_args().collect::<Vec<_>>(),
            enforcement = self.enforcement.name(),
            "Spawning dig"
        );

        let started = Instant::now();
        let mut child = command.spawn().map_err(|e| self.spawn_error(&dig, e))?;
        // Captured before the child is reaped, when `Child::id` starts returning `None`.
        let pid = child.id();

        let stdout_reader = tokio::spawn(read_pipe(child.stdout.take()));
        let stderr_reader = tokio::spawn(read_pipe(child.stderr.take()));

        let deadline = self.enforcement.supervisor_deadline(request.timeout());
        let waited = tokio::time::timeout(deadline, child.wait()).await;
        let (status, deadline_expired) = match waited {
            Ok(status) => (status, false),
            Err(_) => {
                warn!(
                    domain = %request.domain(),
                    deadline_ms = deadline.as_millis() as u64,
                    "dig exceeded its deadline, killing process group"
                );
                kill_process_group(&mut child);
                (child.wait().await, true)
            }
        };
        let elapsed = started.elapsed();

        // Anything dig left behind in its group goes too, so no descendant
        // outlives the lookup or keeps the pipes open.
        if let Some(pid) = pid {
            signal_group(pid);
        }

        let status = status.map_err(|e| {
            QueryError::ExecutionFailed(format!("failed to wait for dig: {}", e))
        })?;

        let stdout = drain(stdout_reader, "stdout").await;
        let stderr = drain(stderr_reader, "stderr").await;
        let (stdout, stderr) = (stdout?, stderr?);

        let exit_code = status.code();
        let timed_out = deadline_expired || self.enforcement.reports_timeout(exit_code);

        debug!(
            exit_code = ?exit_code,
            timed_out,
            elapsed_ms = elapsed.as_millis() as u64,
            stdout_bytes = stdout.len(),
            "dig finished"
        );

        Ok(ProcessOutput {
            stdout: String::from_utf8_lossy(&stdout).into_owned(),
            stderr: String::from_utf8_lossy(&stderr).into_owned(),
            exit_code,
            timed_out,
            elapsed,
        })
    }
}

async fn read_pipe<R: AsyncRead + Unpin>(pipe: Option<R>) -> io::Result<Vec<u8>> {
    let mut pipe = pipe.ok_or_else(|| io::Error::other("pipe was not captured"))?;
    let mut buf = Vec::new();
    pipe.read_to_end(&mut buf).await?;
    Ok(buf)
}

async fn drain(
    mut reader: JoinHandle<io::Result<Vec<u8>>>,
    stream: &str,
) -> Result<Vec<u8>, QueryError> {
    match tokio::time::timeout(PIPE_DRAIN_GRACE, &mut reader).await {
        Ok(Ok(Ok(bytes))) => Ok(bytes),
        Ok(Ok(Err(e))) => Err(QueryError::ExecutionFailed(format!(
            "failed to read dig {}: {}",
            stream, e
        ))),
        Ok(Err(e)) => Err(QueryError::ExecutionFailed(format!(
            "dig {} reader task failed: {}",
            stream, e
        ))),
        Err(_) => {
            reader.abort();
            warn!(stream, "dig output pipe still open after exit");
            Err(QueryError::ExecutionFailed(format!(
                "dig {} was still held open {} ms after dig exited",
                stream,
                PIPE_DRAIN_GRACE.as_millis()
            )))
        }
    }
}

fn kill_process_group(child: &mut Child) {
    if let Some(pid) = child.id() {
        signal_group(pid);
    }
    if let Err(e) = child.start_kill() {
        debug!(error = %e, "start_kill failed");
    }
}

#[cfg(unix)]
fn signal_group(pid: u32) {
    // SAFETY: killpg only sends a signal. The group was created for this
    // child by `process_group(0)`, so its id equals the child's pid.
    let rc = unsafe { libc::killpg(pid as libc::pid_t, libc::SIGKILL) };
    if rc != 0 {
        let e = io::Error::last_os_error();
        // ESRCH: the group is already empty.
        if e.raw_os_error() != Some(libc::ESRCH) {
            debug!(error = %e, "killpg failed");
        }
    }
}

#[cfg(not(unix))]
fn signal_group(_pid: u32) {}
