//! Monitoring plugin comparing a running server's version with its upstream
//! releases.
//!
//! The plugin prints a single status line and exits with the usual
//! monitoring-plugin exit codes (0 OK, 1 WARNING, 2 CRITICAL, 3 UNKNOWN).

pub mod cli;
pub mod config;
pub mod error;
pub mod plugin;
pub mod version;

pub use error::CheckError;
