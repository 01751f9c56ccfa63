/* src/logging.rs */

//!
//! Emits storage failures through `log` or `tracing`, whichever is enabled.

use std::error::Error as StdError;

use crate::base::cause_texts;
use crate::storage::{RemovalError, StorageError, StorageOperation};

fn emit(operation: StorageOperation, description: &str, error: &(dyn StdError + 'static)) {
	let causes = cause_texts(error);

	#[cfg(feature = "logging")]
	{
		if causes.is_empty() {
			log::warn!("storage {} failed: {}", operation, description);
		} else {
			log::warn!(
				"storage {} failed: {} (caused by: {})",
				operation,
				description,
				causes.join(": ")
			);
		}
	}

	#[cfg(feature = "tracing")]
	tracing::warn!(
		operation = %operation,
		message = %description,
		causes = ?causes,
		"storage operation failed"
	);
}

impl StorageError {
	/// Records this failure at warning level.
	pub fn log(&self) {
		emit(self.operation(), &self.description(), self);
	}
}

impl RemovalError {
	/// Records this failure at warning level.
	pub fn log(&self) {
		emit(self.operation(), &self.description(), self);
	}
}
