pub mod executable;

pub use executable::{find_executable, find_executable_in};
