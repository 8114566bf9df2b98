//! Command-line interface module
//! 
//! Handles argument parsing

pub mod args;

pub use args::*;
