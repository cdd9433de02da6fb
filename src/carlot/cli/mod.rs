//! # CLI Layer
//!
//! This module is **one possible client** for carlot; the HTTP server is another.
//!
//! The CLI layer is the only place in the binary that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Installs the tracing subscriber
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `setup.rs`: clap definitions
//! - `commands.rs`: `run()`, context setup and per-command handlers
//! - `print.rs`: output formatting

mod commands;
mod print;
mod setup;

pub use commands::run;
