pub mod lookup;

pub use lookup::{QueryArgs, RunQueryUseCase};
