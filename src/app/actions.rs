//! Actions representing side effects to be executed by the plugin runtime.
//!
//! This module defines the [`Action`] type, the imperative commands produced
//! by the event handler after processing user input or system events.
//! Actions bridge pure state transformations and effectful operations like
//! issuing the directory request, persisting the theme, or hiding the pane.
//!
//! The event handler returns a `Vec<Action>` after processing each event,
//! allowing multiple side effects to be queued atomically; the plugin
//! runtime executes them in sequence.

use crate::worker::WorkerMessage;

/// Commands representing side effects to be executed by the plugin runtime.
///
/// Actions are produced by the event handler and executed by the action
/// processor in `main.rs`. They are the boundary between pure state
/// transitions and the Zellij host API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    CloseFocus,

    /// Issues the directory GET request for the given fetch lifecycle.
    ///
    /// The sequence number is carried in the request context so the
    /// response can be matched against the lifecycle that issued it; a
    /// mismatch marks the response stale.
    FetchDirectory {
        /// Sequence number of the issuing fetch lifecycle.
        seq: u64,
    },

    /// Posts a message to the background worker thread.
    ///
    /// Used for preference I/O (loading the persisted theme at startup,
    /// saving it on every toggle) without blocking the render loop.
    PostToWorker(WorkerMessage),

    /// Opens the selected company's website in the host browser.
    OpenWebsite {
        /// URL to open.
        url: String,
    },
}
