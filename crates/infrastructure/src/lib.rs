//! Ferrous Dig Infrastructure Layer
pub mod dig;
pub mod system;
