/* src/storage/macros.rs */

/// Declares a storage operation error: a distinct newtype over
/// [`ErrorDetails`](crate::base::ErrorDetails) with the three constructor
/// forms, accessors, and a conversion into `StorageError`.
macro_rules! operation_error {
	($(#[$attr:meta])* $name:ident => $operation:ident) => {
		$(#[$attr])*
		#[derive(Debug, Clone, thiserror::Error)]
		#[error(transparent)]
		pub struct $name($crate::base::ErrorDetails);

		impl $name {
			/// The operation this error reports on.
			pub const OPERATION: $crate::storage::StorageOperation =
				$crate::storage::StorageOperation::$operation;

			/// Creates an error with a description only.
			pub fn new(message: impl Into<String>) -> Self {
				Self($crate::base::ErrorDetails::new(message))
			}

			/// Creates an error with a description and its underlying cause.
			///
			/// Any `Error + Send + Sync + 'static` is accepted as the cause,
			/// including an existing [`Cause`](crate::base::Cause).
			pub fn with_cause<E>(message: impl Into<String>, cause: E) -> Self
			where
				E: std::error::Error + Send + Sync + 'static,
			{
				Self($crate::base::ErrorDetails::with_cause(message, cause))
			}

			/// Creates an error wrapping an underlying cause, with no extra description.
			pub fn from_cause<E>(cause: E) -> Self
			where
				E: std::error::Error + Send + Sync + 'static,
			{
				Self($crate::base::ErrorDetails::from_cause(cause))
			}

			/// Attaches a user-facing hint on how to recover.
			pub fn with_recovery_suggestion(self, suggestion: impl Into<String>) -> Self {
				Self(self.0.with_recovery_suggestion(suggestion))
			}

			pub fn operation(&self) -> $crate::storage::StorageOperation {
				Self::OPERATION
			}

			pub fn message(&self) -> Option<&str> {
				self.0.message()
			}

			pub fn cause(&self) -> Option<&$crate::base::Cause> {
				self.0.cause()
			}

			pub fn recovery_suggestion(&self) -> Option<&str> {
				self.0.recovery_suggestion()
			}

			/// The message, or the cause's description when no message was given.
			pub fn description(&self) -> std::borrow::Cow<'_, str> {
				self.0.description()
			}

			pub fn details(&self) -> &$crate::base::ErrorDetails {
				&self.0
			}

			pub fn into_details(self) -> $crate::base::ErrorDetails {
				self.0
			}
		}

		impl From<$crate::base::ErrorDetails> for $name {
			fn from(details: $crate::base::ErrorDetails) -> Self {
				Self(details)
			}
		}

		#[cfg(feature = "report")]
		impl From<&$name> for $crate::report::ErrorReport {
			fn from(error: &$name) -> Self {
				Self::capture(error.operation(), error.details(), error)
			}
		}
	};
}

pub(crate) use operation_error;
