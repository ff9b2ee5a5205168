pub mod command;
pub mod executor;
pub mod timeout;

pub use command::{build_command, dig_args};
pub use executor::DigProcessExecutor;
pub use timeout::TimeoutEnforcement;
