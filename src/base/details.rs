/* src/base/details.rs */

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

use super::Cause;

/// Message, cause and recovery hint shared by every storage operation error.
///
/// There is no empty constructor: a value always holds a message, a cause,
/// or both.
#[derive(Debug, Clone)]
pub struct ErrorDetails {
	message: Option<String>,
	cause: Option<Cause>,
	recovery_suggestion: Option<String>,
}

impl ErrorDetails {
	/// Details with a description only.
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: Some(message.into()),
			cause: None,
			recovery_suggestion: None,
		}
	}

	/// Details with a description and the error that triggered it.
	///
	/// `cause` may be any error type, an existing [`Cause`], or an
	/// `Arc<dyn Error + Send + Sync>`; boxed trait objects go through
	/// `Cause::from` first.
	pub fn with_cause<E>(message: impl Into<String>, cause: E) -> Self
	where
		E: StdError + Send + Sync + 'static,
	{
		Self {
			message: Some(message.into()),
			cause: Some(Cause::new(cause)),
			recovery_suggestion: None,
		}
	}

	/// Details wrapping an underlying error, with no extra description.
	pub fn from_cause<E>(cause: E) -> Self
	where
		E: StdError + Send + Sync + 'static,
	{
		Self {
			message: None,
			cause: Some(Cause::new(cause)),
			recovery_suggestion: None,
		}
	}

	/// Attaches a user-facing hint on how to recover.
	pub fn with_recovery_suggestion(mut self, suggestion: impl Into<String>) -> Self {
		self.recovery_suggestion = Some(suggestion.into());
		self
	}

	pub fn message(&self) -> Option<&str> {
		self.message.as_deref()
	}

	pub fn cause(&self) -> Option<&Cause> {
		self.cause.as_ref()
	}

	pub fn recovery_suggestion(&self) -> Option<&str> {
		self.recovery_suggestion.as_deref()
	}

	/// Text suitable for display: the message, or the cause's own
	/// description when no message was given.
	pub fn description(&self) -> Cow<'_, str> {
		match (&self.message, &self.cause) {
			(Some(message), _) => Cow::Borrowed(message.as_str()),
			(None, Some(cause)) => Cow::Owned(cause.to_string()),
			// Unreachable through the public constructors.
			(None, None) => Cow::Borrowed(""),
		}
	}
}

impl fmt::Display for ErrorDetails {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.description())
	}
}

impl StdError for ErrorDetails {
	fn source(&self) -> Option<&(dyn StdError + 'static)> {
		// The wrapped error itself, so callers can downcast to the root type.
		self.cause.as_ref().map(|c| c.as_error() as &(dyn StdError + 'static))
	}
}
