//! Per-call request descriptors.

// self
use crate::{_prelude::*, config, error::ConfigError, http::MultipartForm};

/// Content type the gateway sets for [`RequestBody::Json`].
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Method, body, and header overrides for a single call.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
	/// HTTP method; defaults to `GET`.
	pub method: Method,
	/// Request body.
	pub body: RequestBody,
	/// Caller headers, applied over the configured defaults.
	pub headers: HeaderMap,
}
impl RequestOptions {
	/// Creates options for `method` with no body or header overrides.
	pub fn new(method: Method) -> Self {
		Self { method, ..Default::default() }
	}

	/// `GET` with no body.
	pub fn get() -> Self {
		Self::new(Method::GET)
	}

	/// `POST` with no body yet.
	pub fn post() -> Self {
		Self::new(Method::POST)
	}

	/// Replaces the body.
	pub fn with_body(mut self, body: impl Into<RequestBody>) -> Self {
		self.body = body.into();

		self
	}

	/// Serializes `value` as the JSON body.
	pub fn with_json<B>(self, value: &B) -> Result<Self, ConfigError>
	where
		B: ?Sized + Serialize,
	{
		Ok(self.with_body(RequestBody::json(value)?))
	}

	/// Adds or replaces a header override.
	pub fn with_header(mut self, name: &str, value: &str) -> Result<Self, ConfigError> {
		let (name, value) = config::parse_header(name, value)?;

		self.headers.insert(name, value);

		Ok(self)
	}
}

/// Request body, tagged by how it must be serialized.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RequestBody {
	/// No body.
	#[default]
	Empty,
	/// JSON document sent as `application/json`.
	Json(JsonValue),
	/// Pre-encoded bytes with their own content type.
	Raw {
		/// Encoded body.
		bytes: Vec<u8>,
		/// Declared `Content-Type`.
		content_type: HeaderValue,
	},
	/// Multipart form; the transport supplies the boundary header.
	Multipart(MultipartForm),
}
impl RequestBody {
	/// Converts any serializable value into a JSON body.
	pub fn json<B>(value: &B) -> Result<Self, ConfigError>
	where
		B: ?Sized + Serialize,
	{
		serde_json::to_value(value).map(Self::Json).map_err(ConfigError::BodySerialize)
	}

	/// Wraps pre-encoded bytes with a declared content type.
	pub fn raw(bytes: impl Into<Vec<u8>>, content_type: &str) -> Result<Self, ConfigError> {
		let content_type = HeaderValue::from_str(content_type).map_err(|_| {
			ConfigError::InvalidHeaderValue { name: ::http::header::CONTENT_TYPE.to_string() }
		})?;

		Ok(Self::Raw { bytes: bytes.into(), content_type })
	}

	/// Returns `true` when no body is attached.
	pub fn is_empty(&self) -> bool {
		matches!(self, Self::Empty)
	}
}
impl From<JsonValue> for RequestBody {
	fn from(value: JsonValue) -> Self {
		Self::Json(value)
	}
}
impl From<MultipartForm> for RequestBody {
	fn from(form: MultipartForm) -> Self {
		Self::Multipart(form)
	}
}
