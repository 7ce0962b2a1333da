//! Gateway-level error types shared across requests, stores, and sessions.

// self
use crate::_prelude::*;

/// Gateway-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical gateway error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Session store failure.
	#[error("{0}")]
	Storage(
		#[from]
		#[source]
		crate::store::StoreError,
	),
	/// Local configuration or request construction problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS) raised by the underlying HTTP client.
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Response body could not be decoded into the expected shape.
	#[error(transparent)]
	Decode(#[from] DecodeError),
	/// Remote API answered with a non-success status.
	#[error(transparent)]
	Http(#[from] HttpError),
}
impl Error {
	/// Returns the HTTP status carried by [`Error::Http`], if any.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Http(e) => Some(e.status),
			_ => None,
		}
	}
}

/// Non-success response normalized into a status code plus a best-effort message.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("Request failed with HTTP {status}: {message}")]
pub struct HttpError {
	/// Numeric HTTP status returned by the remote API.
	pub status: u16,
	/// Response body text, else status text, else `HTTP <status>`.
	pub message: String,
}
impl HttpError {
	/// Builds an error from a failed response using the body/status-text/code fallback order.
	pub fn from_parts(status: u16, body: &str, status_text: Option<&str>) -> Self {
		let message = if !body.is_empty() {
			body.to_owned()
		} else if let Some(text) = status_text.filter(|text| !text.is_empty()) {
			text.to_owned()
		} else {
			format!("HTTP {status}")
		};

		Self { status, message }
	}

	/// Returns `true` for 401 responses.
	pub fn is_unauthorized(&self) -> bool {
		self.status == StatusCode::UNAUTHORIZED.as_u16()
	}
}

/// Configuration and request construction failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Configuration document is not valid JSON or has the wrong shape.
	#[error("Gateway configuration document is malformed.")]
	InvalidDocument {
		/// Underlying parser failure.
		#[source]
		source: serde_json::Error,
	},
	/// API root cannot be parsed.
	#[error("API root is not a valid URL.")]
	InvalidApiRoot {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// API root uses a scheme other than HTTP(S).
	#[error("API root must use http or https: {url}.")]
	UnsupportedScheme {
		/// Offending URL.
		url: String,
	},
	/// API root carries a query string or fragment.
	#[error("API root must not carry a query or fragment: {url}.")]
	ApiRootHasQuery {
		/// Offending URL.
		url: String,
	},
	/// Joined request URL cannot be parsed.
	#[error("Request path `{path}` does not form a valid URL.")]
	InvalidPath {
		/// Resource path supplied by the caller.
		path: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Header name is not a valid HTTP token.
	#[error("Header name `{name}` is invalid.")]
	InvalidHeaderName {
		/// Offending header name.
		name: String,
	},
	/// Header value contains characters HTTP does not allow.
	#[error("Value for header `{name}` is invalid.")]
	InvalidHeaderValue {
		/// Header whose value was rejected.
		name: String,
	},
	/// Request body could not be serialized to JSON.
	#[error("Request body could not be serialized to JSON.")]
	BodySerialize(#[source] serde_json::Error),
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Failures turning a successful response into the caller's expected shape.
#[derive(Debug, ThisError)]
pub enum DecodeError {
	/// Response declared JSON but the body did not parse.
	#[error("Response declared JSON but the body is malformed.")]
	MalformedJson {
		/// Underlying parser failure.
		#[source]
		source: serde_json::Error,
	},
	/// JSON payload does not match the requested type.
	#[error("JSON payload does not match the expected type.")]
	Mismatch {
		/// Structured deserialization failure, including the offending path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Caller asked for JSON but the response was plain text.
	#[error("Expected a JSON payload but the response was text.")]
	NotJson,
	/// Authentication response did not carry a session token.
	#[error("Authentication response is missing the `{field}` token field.")]
	MissingToken {
		/// Field that was expected to hold the token.
		field: String,
	},
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the storefront API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the storefront API.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
