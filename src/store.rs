//! Session store contracts and built-in key-value backends.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

// self
use crate::_prelude::*;

/// Key under which the session token is stored unless configured otherwise.
pub const SESSION_TOKEN_KEY: &str = "token";

/// Persistent key-value capability supplied by the hosting environment.
///
/// Every method is atomic per call, so readers never need extra locking. The request gateway
/// only ever calls [`get`](SessionStore::get); writes and removals belong to session flows.
pub trait SessionStore
where
	Self: Send + Sync,
{
	/// Returns the value stored under `key`, if present.
	fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

	/// Stores or replaces the value under `key`.
	fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

	/// Removes `key`, returning the previous value.
	fn remove(&self, key: &str) -> Result<Option<String>, StoreError>;
}

/// Error type produced by [`SessionStore`] implementations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum StoreError {
	/// Serialization failures surfaced by the backend.
	#[error("Serialization error: {message}.")]
	Serialization {
		/// Human-readable error payload.
		message: String,
	},
	/// Backend-level failure for the storage engine.
	#[error("Backend failure: {message}.")]
	Backend {
		/// Human-readable error payload.
		message: String,
	},
}
