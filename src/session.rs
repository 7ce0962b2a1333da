//! Login, registration, and logout flows that own the stored session token.
//!
//! The gateway only ever reads the token. [`SessionManager`] is the collaborator that writes
//! it after a successful login or registration and removes it at logout, using the same
//! store and key the gateway's [`StoredCredentials`] read from.

// self
use crate::{
	_prelude::*,
	auth::{SessionToken, StoredCredentials},
	error::DecodeError,
	gateway::{Gateway, Payload},
	http::HttpTransport,
	store::{SESSION_TOKEN_KEY, SessionStore},
};

/// Response field holding the token unless configured otherwise.
pub const DEFAULT_TOKEN_FIELD: &str = "token";

/// Writes and clears the session token around authentication calls.
#[derive(Clone)]
pub struct SessionManager {
	store: Arc<dyn SessionStore>,
	key: String,
	token_field: String,
}
impl SessionManager {
	/// Manages the token under [`SESSION_TOKEN_KEY`], read from the `token` response field.
	pub fn new(store: Arc<dyn SessionStore>) -> Self {
		Self { store, key: SESSION_TOKEN_KEY.into(), token_field: DEFAULT_TOKEN_FIELD.into() }
	}

	/// Overrides the store key.
	pub fn with_key(mut self, key: impl Into<String>) -> Self {
		self.key = key.into();

		self
	}

	/// Overrides the response field the token is read from.
	pub fn with_token_field(mut self, field: impl Into<String>) -> Self {
		self.token_field = field.into();

		self
	}

	/// Credential provider reading the token this manager writes.
	pub fn credentials(&self) -> StoredCredentials {
		StoredCredentials::with_key(Arc::clone(&self.store), self.key.clone())
	}

	/// Logs in through `gateway`, stores the returned token, and returns the full payload.
	///
	/// A response without a string token field fails and leaves the store untouched.
	pub async fn sign_in<T, B>(&self, gateway: &Gateway<T>, body: &B) -> Result<Payload>
	where
		T: ?Sized + HttpTransport,
		B: ?Sized + Serialize,
	{
		let payload = gateway.login(body).await?;

		self.persist_from(&payload)?;

		Ok(payload)
	}

	/// Registers through `gateway`, stores the returned token, and returns the full payload.
	pub async fn sign_up<T, B>(&self, gateway: &Gateway<T>, body: &B) -> Result<Payload>
	where
		T: ?Sized + HttpTransport,
		B: ?Sized + Serialize,
	{
		let payload = gateway.register(body).await?;

		self.persist_from(&payload)?;

		Ok(payload)
	}

	/// Removes the stored token. Returns `true` when a session was active.
	pub fn sign_out(&self) -> Result<bool> {
		Ok(self.store.remove(&self.key)?.is_some())
	}

	/// Reads the current token, if any.
	pub fn current_token(&self) -> Result<Option<SessionToken>> {
		Ok(self.store.get(&self.key)?.and_then(SessionToken::from_stored))
	}

	fn persist_from(&self, payload: &Payload) -> Result<()> {
		let token = payload
			.as_json()
			.and_then(|value| value.get(&self.token_field))
			.and_then(JsonValue::as_str)
			.filter(|token| !token.is_empty())
			.ok_or_else(|| DecodeError::MissingToken { field: self.token_field.clone() })?;

		self.store.set(&self.key, token)?;

		Ok(())
	}
}
impl Debug for SessionManager {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("SessionManager")
			.field("key", &self.key)
			.field("token_field", &self.token_field)
			.finish()
	}
}
