//! Background worker thread for asynchronous preference I/O.
//!
//! This module implements the worker thread that owns the preference file so
//! no disk I/O ever happens on the main plugin UI thread. It uses Zellij's
//! worker API for cross-thread communication.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types
//! - `handler`: Worker implementation and message processing logic

pub mod handler;
pub mod messages;

pub use handler::FirmdexWorker;
pub use messages::{WorkerMessage, WorkerResponse};
