//! Execution modes
//!
//! Only the HTTP server mode exists; `--generate-config` is handled in
//! `main` before any mode starts.

pub mod server;

pub use server::run_server;
