//! # Carlot Architecture
//!
//! Carlot manages a small fleet of rentable cars: adding and removing cars,
//! renting them out, taking them back, and keeping the fleet in a flat text file
//! so it survives restarts. It is a library with two clients, a CLI and an HTTP
//! server, neither of which holds any rental logic.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Clients: CLI (cli/, wired by main.rs), HTTP (server/)      │
//! │  - Parse arguments or request bodies, format output         │
//! │  - The ONLY places that know about stdout or status codes   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Parses raw text input, rejects blank car details         │
//! │  - Returns structured CmdResult values                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Record Store (records.rs)                                  │
//! │  - Cars, customers, rentals, the car ID counter             │
//! │  - Rent/return/delete rules; persists after every change    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - CarStore trait, pipe-delimited line format               │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes Rust arguments and returns Rust types. It
//! never writes to stdout, never exits the process and never locks. Logging goes
//! through `tracing`; the binary decides where it ends up.
//!
//! ## Testing Strategy
//!
//! 1. **Record store and codec**: unit tests against `InMemoryStore`, which runs
//!    the real line format without touching disk.
//! 2. **API**: input parsing and validation, result shaping.
//! 3. **Clients**: `tests/` drives the HTTP router over a real socket and the
//!    binary through `assert_cmd`; `FileStore` is tested against temp dirs.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`records`]: The record store and rental rules
//! - [`store`]: Persistence abstraction, file format and implementations
//! - [`model`]: Core data types (`Car`, `Customer`, `Rental`)
//! - [`server`]: Axum router and handlers
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing and printing for the binary (not part of the lib API)

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod records;
pub mod server;
pub mod store;
