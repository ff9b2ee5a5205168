use crate::query_request::{DEFAULT_SERVER, DEFAULT_TIMEOUT_SECS};
use serde::{Deserialize, Serialize};

/// How the per-lookup deadline is enforced on the `dig` process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeoutMode {
    /// Use the `timeout` wrapper when the host has one, otherwise supervise in-process.
    #[default]
    Auto,
    Wrapper,
    Supervisor,
}

impl TimeoutMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeoutMode::Auto => "auto",
            TimeoutMode::Wrapper => "wrapper",
            TimeoutMode::Supervisor => "supervisor",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LookupConfig {
    #[serde(default = "default_server")]
    pub default_server: String,

    #[serde(default = "default_timeout_secs")]
    pub default_timeout_secs: i64,

    /// Program name looked up on PATH, or a path to the binary.
    #[serde(default = "default_dig_path")]
    pub dig_path: String,

    #[serde(default)]
    pub timeout_mode: TimeoutMode,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            default_server: default_server(),
            default_timeout_secs: default_timeout_secs(),
            dig_path: default_dig_path(),
            timeout_mode: TimeoutMode::default(),
        }
    }
}

fn default_server() -> String {
    DEFAULT_SERVER.to_string()
}

fn default_timeout_secs() -> i64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_dig_path() -> String {
    "dig".to_string()
}
