use crate::dns_record::{parse_answer_section, DnsRecord};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    /// Unmodified stdout of the `dig` run.
    pub raw_output: String,

    pub records: Vec<DnsRecord>,

    /// Wall-clock milliseconds from spawn to exit, always with two fractional digits.
    pub execution_time_ms: String,
}

impl QueryResult {
    pub fn new(raw_output: String, records: Vec<DnsRecord>, elapsed: Duration) -> Self {
        Self {
            raw_output,
            records,
            execution_time_ms: Self::format_elapsed_ms(elapsed),
        }
    }

    pub fn from_output(raw_output: String, elapsed: Duration) -> Self {
        let records = parse_answer_section(&raw_output);
        Self::new(raw_output, records, elapsed)
    }

    pub fn format_elapsed_ms(elapsed: Duration) -> String {
        format!("{:.2}", elapsed.as_secs_f64() * 1000.0)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
