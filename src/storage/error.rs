/* src/storage/error.rs */

use std::borrow::Cow;

use thiserror::Error;

use super::{DownloadError, GetUrlError, ListError, RemovalError, StorageOperation, UploadError};
use crate::base::{Cause, ErrorDetails};

/// Any storage category failure.
///
/// One variant per operation. `Display` and `source()` forward to the
/// payload; use [`StorageError::operation`] or a `match` to tell them apart.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
	#[error(transparent)]
	Upload(#[from] UploadError),

	#[error(transparent)]
	Download(#[from] DownloadError),

	#[error(transparent)]
	Remove(#[from] RemovalError),

	#[error(transparent)]
	List(#[from] ListError),

	#[error(transparent)]
	GetUrl(#[from] GetUrlError),
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
	pub fn operation(&self) -> StorageOperation {
		match self {
			Self::Upload(e) => e.operation(),
			Self::Download(e) => e.operation(),
			Self::Remove(e) => e.operation(),
			Self::List(e) => e.operation(),
			Self::GetUrl(e) => e.operation(),
		}
	}

	pub fn details(&self) -> &ErrorDetails {
		match self {
			Self::Upload(e) => e.details(),
			Self::Download(e) => e.details(),
			Self::Remove(e) => e.details(),
			Self::List(e) => e.details(),
			Self::GetUrl(e) => e.details(),
		}
	}

	pub fn message(&self) -> Option<&str> {
		self.details().message()
	}

	pub fn cause(&self) -> Option<&Cause> {
		self.details().cause()
	}

	pub fn recovery_suggestion(&self) -> Option<&str> {
		self.details().recovery_suggestion()
	}

	pub fn description(&self) -> Cow<'_, str> {
		self.details().description()
	}

	pub fn is_remove(&self) -> bool {
		matches!(self, Self::Remove(_))
	}

	pub fn as_remove(&self) -> Option<&RemovalError> {
		match self {
			Self::Remove(e) => Some(e),
			_ => None,
		}
	}
}
