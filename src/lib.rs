/* src/lib.rs */

//!
//! Typed errors for storage category operations.
//!
//! - **base**: Shared error base (`Cause`, `ErrorDetails`, cause-chain walking).
//! - **storage**: One error type per operation (`RemovalError`, `UploadError`, ...)
//!   and the `StorageError` union over them.
//! - **report**: Serializable snapshot of an error and its cause chain.
//!
//! ## Feature Flags
//!
//! - `full`: Enables all features.
//! - `serde`: `Serialize`/`Deserialize` for `StorageOperation`.
//! - `report`: Enables the `report` module (JSON via `serde_json`).
//! - `logging`: `StorageError::log` through the `log` crate.
//! - `tracing`: `StorageError::log` as a structured `tracing` event.
//!
//! ## Basic Usage
//!
//! ```
//! use std::io;
//! use stowage_error::storage::{RemovalError, StorageError};
//!
//! fn delete(key: &str) -> stowage_error::Result<()> {
//!     let cause = io::Error::new(io::ErrorKind::NotFound, "no such object");
//!     Err(RemovalError::with_cause(format!("cannot remove {key}"), cause).into())
//! }
//!
//! let err = delete("photos/cat.png").unwrap_err();
//! assert!(matches!(err, StorageError::Remove(_)));
//! assert_eq!(err.message(), Some("cannot remove photos/cat.png"));
//! ```

pub mod base;
pub mod storage;

#[cfg(feature = "report")]
pub mod report;

#[cfg(any(feature = "logging", feature = "tracing"))]
mod logging;

pub use base::Cause;
pub use storage::{RemovalError, Result, StorageError, StorageOperation};
