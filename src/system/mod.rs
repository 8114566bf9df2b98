//! System abstraction for environment access
//!
//! The driver reads `LAIR_API_SERVER` through this trait instead of
//! `std::env`, so tests can supply their own environment.

use std::env::VarError;

pub mod mock;
pub mod real;

pub use mock::MockSystem;
pub use real::RealSystem;

/// Unified trait for system operations
///
/// # Implementations
/// - `RealSystem`: Production implementation using `std::env`
/// - `MockSystem`: Test implementation using in-memory storage
pub trait System: Send + Sync {
    /// Get an environment variable
    fn env_var(&self, key: &str) -> Result<String, VarError>;
}
