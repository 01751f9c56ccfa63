/* src/storage/remove.rs */

use super::macros::operation_error;

operation_error! {
	/// Failure of a storage remove operation.
	///
	/// Built where a removal detects failure, from a message, an underlying
	/// cause, or both, and never mutated afterwards. The cause is kept as-is
	/// and is reachable through [`RemovalError::cause`] and
	/// [`std::error::Error::source`].
	///
	/// ```
	/// use stowage_error::storage::RemovalError;
	///
	/// let err = RemovalError::new("file not found");
	/// assert_eq!(err.message(), Some("file not found"));
	/// assert!(err.cause().is_none());
	/// ```
	RemovalError => Remove
}
