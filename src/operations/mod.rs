//! Operations module
//! 
//! Coordinates the project export from configuration to JSON output

pub mod export;

pub use export::*;
