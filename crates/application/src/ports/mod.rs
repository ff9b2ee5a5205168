mod dig_executor;

pub use dig_executor::{DigExecutor, ProcessOutput};

// Re-export for convenience
pub use ferrous_dig_domain::QueryRequest;
