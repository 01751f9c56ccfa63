/* src/storage/mod.rs */

//!
//! Errors raised by storage category operations.
//!
//! - [`RemovalError`] - A remove operation failed
//! - [`UploadError`], [`DownloadError`], [`ListError`], [`GetUrlError`] - Sibling operations
//! - [`StorageError`] - Any of the above, dispatched by variant

mod error;
mod macros;
mod operation;
mod remove;
mod siblings;

pub use error::{Result, StorageError};
pub use operation::StorageOperation;
pub use remove::RemovalError;
pub use siblings::{DownloadError, GetUrlError, ListError, UploadError};
