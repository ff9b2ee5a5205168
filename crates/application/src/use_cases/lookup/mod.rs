pub mod run_query;

pub use run_query::{QueryArgs, RunQueryUseCase};
