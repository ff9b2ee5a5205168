#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_dig_application::ports::{DigExecutor, ProcessOutput};
use ferrous_dig_domain::{QueryError, QueryRequest};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

#[derive(Clone)]
pub struct MockDigExecutor {
    available: Arc<AtomicBool>,
    response: Arc<RwLock<Result<ProcessOutput, QueryError>>>,
    calls: Arc<RwLock<Vec<QueryRequest>>>,
}

impl MockDigExecutor {
    pub fn new() -> Self {
        Self {
            available: Arc::new(AtomicBool::new(true)),
            response: Arc::new(RwLock::new(Ok(ProcessOutputBuilder::new().build()))),
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    pub fn set_output(&self, output: ProcessOutput) {
        *self.response.write().unwrap() = Ok(output);
    }

    pub fn set_error(&self, error: QueryError) {
        *self.response.write().unwrap() = Err(error);
    }

    pub fn calls(&self) -> Vec<QueryRequest> {
        self.calls.read().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

impl Default for MockDigExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DigExecutor for MockDigExecutor {
    fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    async fn execute(&self, request: &QueryRequest) -> Result<ProcessOutput, QueryError> {
        self.calls.write().unwrap().push(request.clone());
        self.response.read().unwrap().clone()
    }
}

pub struct ProcessOutputBuilder {
    stdout: String,
    stderr: String,
    exit_code: Option<i32>,
    timed_out: bool,
    elapsed: Duration,
}

impl ProcessOutputBuilder {
    pub fn new() -> Self {
        Self {
            stdout: String::new(),
            stderr: String::new(),
            exit_code: Some(0),
            timed_out: false,
            elapsed: Duration::from_micros(12_345),
        }
    }

    pub fn stdout(mut self, stdout: &str) -> Self {
        self.stdout = stdout.to_string();
        self
    }

    pub fn stderr(mut self, stderr: &str) -> Self {
        self.stderr = stderr.to_string();
        self
    }

    pub fn exit_code(mut self, code: Option<i32>) -> Self {
        self.exit_code = code;
        self
    }

    pub fn timed_out(mut self) -> Self {
        self.timed_out = true;
        self.exit_code = None;
        self
    }

    pub fn elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = elapsed;
        self
    }

    pub fn build(self) -> ProcessOutput {
        ProcessOutput {
            stdout: self.stdout,
            stderr: self.stderr,
            exit_code: self.exit_code,
            timed_out: self.timed_out,
            elapsed: self.elapsed,
        }
    }
}
