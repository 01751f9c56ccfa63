/* src/storage/siblings.rs */

use super::macros::operation_error;

operation_error! {
	/// Failure of a storage upload operation.
	UploadError => Upload
}

operation_error! {
	/// Failure of a storage download operation.
	DownloadError => Download
}

operation_error! {
	/// Failure of a storage list operation.
	ListError => List
}

operation_error! {
	/// Failure to resolve a URL for a stored object.
	GetUrlError => GetUrl
}
