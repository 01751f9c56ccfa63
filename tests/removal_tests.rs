/* tests/removal_tests.rs */

use std::error::Error as _;
use std::io;
use std::sync::Arc;

use stowage_error::base::{Cause, chain};
use stowage_error::storage::{RemovalError, StorageError, StorageOperation, UploadError};

#[derive(Debug, thiserror::Error)]
#[error("backend rejected delete")]
struct BackendError(#[source] io::Error);

/// Stands in for a collaborator that performs the actual removal.
async fn remove_object(key: &str, cause: Cause) -> stowage_error::Result<()> {
	Err(RemovalError::with_cause(format!("failed to remove {key}"), cause).into())
}

#[test]
fn test_message_only() {
	let err = RemovalError::new("file not found");
	assert_eq!(err.message(), Some("file not found"));
	assert!(err.cause().is_none());
}

#[test]
fn test_message_and_cause() {
	let io_err = Cause::from(io::Error::new(io::ErrorKind::TimedOut, "timed out"));
	let err = RemovalError::with_cause("network failure", io_err.clone());

	assert_eq!(err.message(), Some("network failure"));
	assert!(err.cause().unwrap().ptr_eq(&io_err));
	assert_eq!(
		err.cause().unwrap().downcast_ref::<io::Error>().unwrap().kind(),
		io::ErrorKind::TimedOut
	);
}

#[test]
fn test_cause_only() {
	let io_err = Cause::from(io::Error::other("disk unavailable"));
	let err = RemovalError::from_cause(io_err.clone());

	assert!(err.cause().unwrap().ptr_eq(&io_err));
	assert!(err.message().is_none());
	assert_eq!(err.to_string(), "disk unavailable");
}

#[test]
fn test_shared_arc_cause_keeps_identity() {
	let shared: Arc<dyn std::error::Error + Send + Sync> = Arc::new(io::Error::other("shared"));
	let err = RemovalError::from_cause(Arc::clone(&shared));
	let held = err.cause().unwrap().clone().into_inner();
	assert!(Arc::ptr_eq(&held, &shared));
}

#[test]
fn test_distinct_from_upload() {
	let remove = StorageError::from(RemovalError::new("denied"));
	let upload = StorageError::from(UploadError::new("denied"));

	match (&remove, &upload) {
		(StorageError::Remove(_), StorageError::Upload(_)) => (),
		_ => panic!("Expected Remove and Upload variants"),
	}
	assert_eq!(remove.operation(), StorageOperation::Remove);
	assert_eq!(upload.operation(), StorageOperation::Upload);
}

#[test]
fn test_chain_is_preserved_through_wrapping() {
	let err = StorageError::from(RemovalError::with_cause(
		"cannot remove",
		BackendError(io::Error::new(
			io::ErrorKind::PermissionDenied,
			"permission denied",
		)),
	));

	let texts: Vec<String> = chain(&err).map(|e| e.to_string()).collect();
	assert_eq!(
		texts,
		["cannot remove", "backend rejected delete", "permission denied"]
	);
	assert!(err.source().is_some());
}

#[test]
fn test_source_downcasts_to_root_error() {
	let err = StorageError::from(RemovalError::with_cause(
		"x",
		io::Error::new(io::ErrorKind::NotFound, "gone"),
	));

	let io_err = err
		.source()
		.and_then(|e| e.downcast_ref::<io::Error>())
		.expect("Expected io::Error as source");
	assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
}

#[test]
fn test_custom_error_as_cause() {
	let err = RemovalError::from_cause(BackendError(io::Error::other("permission denied")));

	assert!(err.cause().unwrap().is::<BackendError>());
	let backend = err.source().unwrap().downcast_ref::<BackendError>().unwrap();
	assert_eq!(backend.0.to_string(), "permission denied");
	assert_eq!(err.to_string(), "backend rejected delete");
}

#[tokio::test]
async fn test_error_crosses_task_boundary() {
	let cause = Cause::from(io::Error::other("connection reset"));
	let expected = cause.clone();

	let handle = tokio::spawn(async move { remove_object("a/b.txt", cause).await });
	let err = handle.await.unwrap().unwrap_err();

	let removal = err.as_remove().expect("Expected Remove variant");
	assert_eq!(removal.message(), Some("failed to remove a/b.txt"));
	assert!(removal.cause().unwrap().ptr_eq(&expected));
}
