//! Configuration management module
//!
//! Turns the `LAIR_API_SERVER` URL and the CLI flags into a connection config

pub mod connection;

pub use connection::ConnectionConfig;

/// Environment variable holding the Lair API server URL
pub const LAIR_API_SERVER: &str = "LAIR_API_SERVER";
