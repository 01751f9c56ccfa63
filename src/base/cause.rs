/* src/base/cause.rs */

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

type DynError = dyn StdError + Send + Sync + 'static;

/// Shared handle to the underlying error behind a storage failure.
///
/// Cloning is cheap and keeps identity: every clone points at the same
/// allocation, which [`Cause::ptr_eq`] can check. `Display` and `source()`
/// pass straight through to the wrapped error, so a cause chain reads the same
/// with or without this wrapper.
#[derive(Clone)]
pub struct Cause(Arc<DynError>);

impl Cause {
	/// Wraps a concrete error.
	///
	/// Passing an existing `Cause` or an `Arc<dyn Error + Send + Sync>`
	/// reuses that allocation instead of nesting it, so identity holds.
	pub fn new<E>(error: E) -> Self
	where
		E: StdError + Send + Sync + 'static,
	{
		let any = &error as &dyn Any;
		if let Some(cause) = any.downcast_ref::<Cause>() {
			return cause.clone();
		}
		if let Some(shared) = any.downcast_ref::<Arc<DynError>>() {
			return Self(Arc::clone(shared));
		}
		Self(Arc::new(error))
	}

	/// Returns `true` if both handles point at the same underlying error.
	pub fn ptr_eq(&self, other: &Cause) -> bool {
		Arc::ptr_eq(&self.0, &other.0)
	}

	/// Attempts to view the underlying error as `E`.
	pub fn downcast_ref<E>(&self) -> Option<&E>
	where
		E: StdError + 'static,
	{
		self.0.downcast_ref::<E>()
	}

	/// Returns `true` if the underlying error is an `E`.
	pub fn is<E>(&self) -> bool
	where
		E: StdError + 'static,
	{
		self.0.is::<E>()
	}

	/// Borrows the underlying error as a trait object.
	pub fn as_error(&self) -> &DynError {
		&*self.0
	}

	/// Returns the shared pointer, for callers that keep their own handle.
	pub fn into_inner(self) -> Arc<DynError> {
		self.0
	}
}

impl fmt::Debug for Cause {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(&*self.0, f)
	}
}

impl fmt::Display for Cause {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&*self.0, f)
	}
}

impl StdError for Cause {
	fn source(&self) -> Option<&(dyn StdError + 'static)> {
		self.0.source()
	}
}

impl From<Arc<DynError>> for Cause {
	fn from(error: Arc<DynError>) -> Self {
		Self(error)
	}
}

impl From<Box<DynError>> for Cause {
	fn from(error: Box<DynError>) -> Self {
		Self(Arc::from(error))
	}
}

impl From<std::io::Error> for Cause {
	fn from(error: std::io::Error) -> Self {
		Self::new(error)
	}
}
