//! File-based structured logging for the plugin sandbox.
//!
//! Zellij plugins have no terminal of their own, so logs go to a rotating
//! file under the data directory instead of stderr. The pipeline is a plain
//! `tracing-subscriber` fmt layer writing through [`file_writer::FileWriter`].
//!
//! # Configuration
//!
//! Log level is controlled via the `trace_level` plugin configuration option,
//! defaulting to `"info"`.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use init::init_tracing;
