/* src/base/mod.rs */

//!
//! Shared error base for every storage operation error.
//!
//! - [`Cause`] - Identity-preserving handle to an underlying error
//! - [`ErrorDetails`] - Message, cause and recovery suggestion
//! - [`chain`] - Walks an error's `source()` chain

mod cause;
mod chain;
mod details;

pub use cause::Cause;
pub use chain::{Chain, cause_texts, chain};
pub use details::ErrorDetails;
