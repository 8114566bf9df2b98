//! `drone-export` - Downloads a Lair project and prints it as JSON
//!
//! This library reads the Lair API server location from `LAIR_API_SERVER`,
//! builds an authenticated client, exports a single project and encodes it
//! as JSON. The environment and the network client are injected, so the
//! whole pipeline can run against in-memory substitutes.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod operations;
pub mod system;

use anyhow::Result;
use cli::Args;
use client::HttpClientFactory;
use operations::export::export_project;
use system::RealSystem;

/// Main entry point for the drone-export library
///
/// Exports the project named in `args` and writes its JSON to stdout.
pub fn run(args: &Args) -> Result<()> {
    let system = RealSystem;
    let json = export_project(args, &system, &HttpClientFactory)?;

    // Output to stdout (not using logging)
    println!("{json}");

    Ok(())
}
