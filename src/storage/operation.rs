/* src/storage/operation.rs */

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The storage category operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StorageOperation {
	/// Sending an object to storage.
	Upload,
	/// Fetching an object from storage.
	Download,
	/// Deleting a stored object.
	Remove,
	/// Enumerating stored objects.
	List,
	/// Resolving a URL for a stored object.
	GetUrl,
}

impl StorageOperation {
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Upload => "upload",
			Self::Download => "download",
			Self::Remove => "remove",
			Self::List => "list",
			Self::GetUrl => "get_url",
		}
	}
}

impl fmt::Display for StorageOperation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
