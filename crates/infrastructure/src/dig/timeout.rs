use crate::system::find_executable;
use ferrous_dig_domain::{ConfigError, TimeoutMode};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

pub const WRAPPER_PROGRAM: &str = "timeout";

/// Seconds the wrapper waits after SIGTERM before escalating to SIGKILL.
pub const WRAPPER_KILL_AFTER_SECS: u64 = 1;

/// Extra time the in-process deadline allows when the wrapper is in charge.
const WRAPPER_BACKSTOP: Duration = Duration::from_secs(2);

/// `timeout` exits 124 when the command timed out, 137 when it had to SIGKILL it.
const WRAPPER_TIMEOUT_EXIT_CODES: [i32; 2] = [124, 137];

/// How a lookup deadline is enforced on the `dig` process. Chosen once at
/// startup; the executor never branches on the platform itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeoutEnforcement {
    /// Prefix the command with coreutils `timeout`.
    Wrapper { program: PathBuf },
    /// Run `dig` directly and kill its process group when the deadline expires.
    Supervisor,
}

impl TimeoutEnforcement {
    pub fn detect(mode: TimeoutMode) -> Result<Self, ConfigError> {
        let enforcement = match mode {
            TimeoutMode::Supervisor => TimeoutEnforcement::Supervisor,
            TimeoutMode::Wrapper => match Self::wrapper_on_path() {
                Some(program) => TimeoutEnforcement::Wrapper { program },
                None => {
                    return Err(ConfigError::Validation(format!(
                        "timeout_mode = \"wrapper\" but no usable `{}` program was found",
                        WRAPPER_PROGRAM
                    )))
                }
            },
            TimeoutMode::Auto => Self::wrapper_on_path()
                .map(|program| TimeoutEnforcement::Wrapper { program })
                .unwrap_or(TimeoutEnforcement::Supervisor),
        };

        info!(
            mode = mode.as_str(),
            enforcement = enforcement.name(),
            "Timeout enforcement selected"
        );
        Ok(enforcement)
    }

    /// Windows ships an unrelated `timeout.exe`, so the wrapper is Unix-only.
    fn wrapper_on_path() -> Option<PathBuf> {
        if cfg!(unix) {
            find_executable(WRAPPER_PROGRAM)
        } else {
            None
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TimeoutEnforcement::Wrapper { .. } => "wrapper",
            TimeoutEnforcement::Supervisor => "supervisor",
        }
    }

    /// Deadline for the in-process timer. Always armed; with the wrapper it
    /// only fires if the wrapper itself fails to stop the process.
    pub fn supervisor_deadline(&self, timeout: Duration) -> Duration {
        match self {
            TimeoutEnforcement::Wrapper { .. } => {
                timeout + Duration::from_secs(WRAPPER_KILL_AFTER_SECS) + WRAPPER_BACKSTOP
            }
            TimeoutEnforcement::Supervisor => timeout,
        }
    }

    /// Whether an exit status means the wrapper stopped the process.
    pub fn reports_timeout(&self, exit_code: Option<i32>) -> bool {
        match (self, exit_code) {
            (TimeoutEnforcement::Wrapper { .. }, Some(code)) => {
                WRAPPER_TIMEOUT_EXIT_CODES.contains(&code)
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrapper() -> TimeoutEnforcement {
        TimeoutEnforcement::Wrapper {
            program: PathBuf::from("/usr/bin/timeout"),
        }
    }

    #[test]
    fn test_supervisor_mode_is_always_honoured() {
        assert_eq!(
            TimeoutEnforcement::detect(TimeoutMode::Supervisor).unwrap(),
            TimeoutEnforcement::Supervisor
        );
    }

    #[test]
    fn test_auto_mode_never_fails() {
        assert!(TimeoutEnforcement::detect(TimeoutMode::Auto).is_ok());
    }

    #[test]
    fn test_wrapper_mode_matches_host() {
        let result = TimeoutEnforcement::detect(TimeoutMode::Wrapper);
        match TimeoutEnforcement::wrapper_on_path() {
            Some(program) => assert_eq!(result.unwrap(), TimeoutEnforcement::Wrapper { program }),
            None => assert!(matches!(result, Err(ConfigError::Validation(_)))),
        }
    }

    #[test]
    fn test_supervisor_deadline() {
        let timeout = Duration::from_secs(10);
        assert_eq!(
            TimeoutEnforcement::Supervisor.supervisor_deadline(timeout),
            timeout
        );
        assert_eq!(
            wrapper().supervisor_deadline(timeout),
            Duration::from_secs(13)
        );
    }

    #[test]
    fn test_reports_timeout() {
        assert!(wrapper().reports_timeout(Some(124)));
        assert!(wrapper().reports_timeout(Some(137)));
        assert!(!wrapper().reports_timeout(Some(0)));
        assert!(!wrapper().reports_timeout(Some(9)));
        assert!(!wrapper().reports_timeout(None));
        assert!(!TimeoutEnforcement::Supervisor.reports_timeout(Some(124)));
    }
}
