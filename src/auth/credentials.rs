//! Credential providers consulted by the gateway before every outgoing request.

// self
use crate::{
	_prelude::*,
	auth::SessionToken,
	store::{SESSION_TOKEN_KEY, SessionStore, StoreError},
};

/// Zero-argument accessor returning the freshest session token.
///
/// The gateway calls [`session_token`](CredentialProvider::session_token) immediately before
/// each request and never caches the answer, so a token written or cleared mid-session takes
/// effect on the very next call.
pub trait CredentialProvider
where
	Self: Send + Sync,
{
	/// Returns the current token, or `None` when no session is active.
	fn session_token(&self) -> Result<Option<SessionToken>, StoreError>;
}
impl<F> CredentialProvider for F
where
	F: Fn() -> Option<SessionToken> + Send + Sync,
{
	fn session_token(&self) -> Result<Option<SessionToken>, StoreError> {
		Ok(self())
	}
}

/// Provider for anonymous gateways that never attach credentials.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoCredentials;
impl CredentialProvider for NoCredentials {
	fn session_token(&self) -> Result<Option<SessionToken>, StoreError> {
		Ok(None)
	}
}

/// Provider returning one fixed token, handy for service accounts and tests.
#[derive(Clone, Debug)]
pub struct StaticCredentials(SessionToken);
impl StaticCredentials {
	/// Wraps the provided token.
	pub fn new(token: SessionToken) -> Self {
		Self(token)
	}
}
impl CredentialProvider for StaticCredentials {
	fn session_token(&self) -> Result<Option<SessionToken>, StoreError> {
		Ok(Some(self.0.clone()))
	}
}

/// Provider that reads the token from a [`SessionStore`] under a fixed key on every call.
#[derive(Clone)]
pub struct StoredCredentials {
	store: Arc<dyn SessionStore>,
	key: String,
}
impl StoredCredentials {
	/// Reads from `store` under [`SESSION_TOKEN_KEY`].
	pub fn new(store: Arc<dyn SessionStore>) -> Self {
		Self::with_key(store, SESSION_TOKEN_KEY)
	}

	/// Reads from `store` under a custom key.
	pub fn with_key(store: Arc<dyn SessionStore>, key: impl Into<String>) -> Self {
		Self { store, key: key.into() }
	}

	/// Key this provider reads.
	pub fn key(&self) -> &str {
		&self.key
	}
}
impl CredentialProvider for StoredCredentials {
	fn session_token(&self) -> Result<Option<SessionToken>, StoreError> {
		Ok(self.store.get(&self.key)?.and_then(SessionToken::from_stored))
	}
}
impl Debug for StoredCredentials {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("StoredCredentials").field("key", &self.key).finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::store::MemoryStore;

	#[test]
	fn stored_credentials_read_fresh_values() {
		let backend = MemoryStore::default();
		let provider = StoredCredentials::new(Arc::new(backend.clone()));

		assert!(provider.session_token().expect("Memory store reads cannot fail.").is_none());

		backend.set(SESSION_TOKEN_KEY, "first").expect("Memory store writes cannot fail.");

		assert_eq!(
			provider
				.session_token()
				.expect("Memory store reads cannot fail.")
				.map(|token| token.expose().to_owned()),
			Some("first".into())
		);

		backend.set(SESSION_TOKEN_KEY, "").expect("Memory store writes cannot fail.");

		assert!(provider.session_token().expect("Memory store reads cannot fail.").is_none());
	}

	#[test]
	fn closures_act_as_providers() {
		let provider = || Some(SessionToken::new("from-closure"));
		let token = CredentialProvider::session_token(&provider)
			.expect("Closure providers never fail.")
			.expect("Closure should yield a token.");

		assert_eq!(token.expose(), "from-closure");
		assert!(NoCredentials.session_token().expect("NoCredentials never fails.").is_none());
	}
}
