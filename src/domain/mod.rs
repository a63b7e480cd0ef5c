//! Domain layer for the Firmdex plugin.
//!
//! This module contains the core domain types and the pure filtering logic,
//! independent of Zellij-specific APIs or infrastructure concerns. Nothing in
//! here performs I/O: the filter predicate and the derived option sets are
//! total functions over company collections.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`company`]: Company record model
//! - [`filters`]: Filter selection, predicate, and derived option sets

pub mod company;
pub mod error;
pub mod filters;

pub use company::Company;
pub use error::{FirmdexError, Result};
pub use filters::{FilterSelection, ALL_SENTINEL};
