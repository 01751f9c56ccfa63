/* src/report.rs */

//!
//! Serializable snapshot of a storage error and its full cause chain.

use std::error::Error as StdError;

use serde::{Deserialize, Serialize};

use crate::base::{ErrorDetails, cause_texts};
use crate::storage::{StorageError, StorageOperation};

/// A display-ready record of a storage failure.
///
/// Built from a [`StorageError`] or from any operation error
/// (`RemovalError`, `UploadError`, ...).
///
/// `causes` holds the text of every error below the top-level one, in
/// order, so a report never loses part of the chain. When the error was
/// built from a cause alone, `description` is that cause's text and it
/// also appears as `causes[0]`; print one or the other, not both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
	pub operation: StorageOperation,
	pub message: Option<String>,
	pub description: String,
	pub recovery_suggestion: Option<String>,
	pub causes: Vec<String>,
}

impl ErrorReport {
	pub(crate) fn capture(
		operation: StorageOperation,
		details: &ErrorDetails,
		error: &(dyn StdError + 'static),
	) -> Self {
		Self {
			operation,
			message: details.message().map(str::to_owned),
			description: details.description().into_owned(),
			recovery_suggestion: details.recovery_suggestion().map(str::to_owned),
			causes: cause_texts(error),
		}
	}

	pub fn to_json(&self) -> Result<String, serde_json::Error> {
		serde_json::to_string(self)
	}

	pub fn from_json(input: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(input)
	}
}

impl From<&StorageError> for ErrorReport {
	fn from(error: &StorageError) -> Self {
		Self::capture(error.operation(), error.details(), error)
	}
}
