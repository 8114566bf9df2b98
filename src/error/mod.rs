//! Error handling module
//! 
//! Defines the fatal error types reported by drone-export

pub mod types;

pub use types::*;
