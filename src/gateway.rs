//! Request gateway: one authenticated, error-normalized primitive plus named storefront calls.

pub mod request;
pub mod response;

mod operations;

pub use request::*;
pub use response::*;

// self
use crate::{
	_prelude::*,
	auth::CredentialProvider,
	config::GatewayConfig,
	error::ConfigError,
	http::{HttpTransport, OutgoingBody, OutgoingRequest},
	obs::{self, Operation, RequestOutcome, RequestSpan},
};
#[cfg(feature = "reqwest")]
use crate::{auth::StoredCredentials, http::ReqwestTransport, store::SessionStore};

#[cfg(feature = "reqwest")]
/// Gateway specialized for the crate's default reqwest transport.
pub type ReqwestGateway = Gateway<ReqwestTransport>;

/// Uniform entry point to the storefront API.
///
/// The gateway owns the transport, the credential provider, and the configuration so callers
/// never touch header bookkeeping. Each call assembles headers from the configured defaults,
/// the caller's overrides, the body's content type, and a freshly read bearer token; sends
/// the request; then either decodes the payload or normalizes the failure into
/// [`HttpError`](crate::error::HttpError). Clones share every component.
pub struct Gateway<T>
where
	T: ?Sized + HttpTransport,
{
	/// Transport used for every outbound request.
	pub transport: Arc<T>,
	/// Source of the session token, consulted before each request.
	pub credentials: Arc<dyn CredentialProvider>,
	/// API root and default headers.
	pub config: Arc<GatewayConfig>,
}
impl<T> Gateway<T>
where
	T: ?Sized + HttpTransport,
{
	/// Creates a gateway over a caller-provided transport.
	pub fn with_transport(
		config: GatewayConfig,
		credentials: Arc<dyn CredentialProvider>,
		transport: impl Into<Arc<T>>,
	) -> Self {
		Self { transport: transport.into(), credentials, config: Arc::new(config) }
	}

	/// Issues `options.method` against `path` under the API root.
	///
	/// Resolves to [`Payload::Json`] when the response declares `application/json`, and to
	/// [`Payload::Text`] otherwise. Statuses outside `[200, 300)` fail with
	/// [`Error::Http`]; transport failures surface unchanged as [`Error::Transport`].
	pub async fn request(&self, path: &str, options: RequestOptions) -> Result<Payload> {
		self.execute(Operation::Request, path, options).await
	}

	/// Same as [`request`](Self::request), then deserializes the JSON payload into `R`.
	pub async fn request_json<R>(&self, path: &str, options: RequestOptions) -> Result<R>
	where
		R: DeserializeOwned,
	{
		self.request(path, options).await?.into_json()
	}

	/// Builds the exact request the gateway would send, without sending it.
	pub fn prepare(&self, path: &str, options: RequestOptions) -> Result<OutgoingRequest> {
		let url = self.config.endpoint(path)?;
		let RequestOptions { method, body, headers: overrides } = options;
		let mut headers = self.config.default_headers.clone();

		headers.extend(overrides);

		let body = match body {
			RequestBody::Empty => OutgoingBody::Empty,
			RequestBody::Json(value) => {
				let bytes = serde_json::to_vec(&value).map_err(ConfigError::BodySerialize)?;

				headers.insert(
					::http::header::CONTENT_TYPE,
					HeaderValue::from_static(JSON_CONTENT_TYPE),
				);

				OutgoingBody::Bytes(bytes)
			},
			RequestBody::Raw { bytes, content_type } => {
				headers.insert(::http::header::CONTENT_TYPE, content_type);

				OutgoingBody::Bytes(bytes)
			},
			RequestBody::Multipart(form) => {
				// The transport writes the boundary into its own Content-Type.
				headers.remove(::http::header::CONTENT_TYPE);

				OutgoingBody::Multipart(form)
			},
		};

		if let Some(token) = self.credentials.session_token()? {
			headers.insert(::http::header::AUTHORIZATION, token.bearer_header()?);
		}

		Ok(OutgoingRequest { method, url, headers, body })
	}

	pub(crate) async fn execute(
		&self,
		operation: Operation,
		path: &str,
		options: RequestOptions,
	) -> Result<Payload> {
		let span = RequestSpan::new(operation, &options.method, path);

		obs::record_request_outcome(operation, RequestOutcome::Attempt);

		let result = span
			.instrument(async {
				let request = self.prepare(path, options)?;
				let response = self.transport.send(request).await?;

				span.record_status(response.status);

				decode_response(response)
			})
			.await;

		match &result {
			Ok(_) => obs::record_request_outcome(operation, RequestOutcome::Success),
			Err(_) => obs::record_request_outcome(operation, RequestOutcome::Failure),
		}

		result
	}
}
#[cfg(feature = "reqwest")]
impl Gateway<ReqwestTransport> {
	/// Creates a gateway backed by a default reqwest client.
	pub fn new(config: GatewayConfig, credentials: Arc<dyn CredentialProvider>) -> Self {
		Self::with_transport(config, credentials, ReqwestTransport::default())
	}

	/// Creates a gateway that reads the session token from `store` under the default key.
	pub fn with_session_store(config: GatewayConfig, store: Arc<dyn SessionStore>) -> Self {
		Self::new(config, Arc::new(StoredCredentials::new(store)))
	}
}
impl<T> Clone for Gateway<T>
where
	T: ?Sized + HttpTransport,
{
	fn clone(&self) -> Self {
		Self {
			transport: Arc::clone(&self.transport),
			credentials: Arc::clone(&self.credentials),
			config: Arc::clone(&self.config),
		}
	}
}
impl<T> Debug for Gateway<T>
where
	T: ?Sized + HttpTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Gateway").field("api_root", &self.config.api_root.as_str()).finish()
	}
}
