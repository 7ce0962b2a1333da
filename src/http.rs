//! Transport primitives for storefront API calls.
//!
//! The module exposes [`HttpTransport`] alongside the [`OutgoingRequest`] and
//! [`IncomingResponse`] values it exchanges, so downstream crates can plug in any HTTP stack
//! (or a fake one in tests) without the gateway knowing how bytes move. Transports only
//! move data: header policy, authentication, and response decoding stay in the gateway.

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// self
use crate::{_prelude::*, error::TransportError};

/// Future returned by [`HttpTransport::send`].
pub type TransportFuture<'a, T> =
	Pin<Box<dyn Future<Output = Result<T, TransportError>> + 'a + Send>>;

/// The gateway's only dependency on an HTTP stack.
///
/// Implementations must be `Send + Sync + 'static` so they can be shared across gateway
/// clones behind an `Arc`. Network-level failures are reported as [`TransportError`] with the
/// original error preserved as its source; any received response, whatever its status, is
/// returned as `Ok`.
pub trait HttpTransport
where
	Self: 'static + Send + Sync,
{
	/// Sends `request` and resolves once the full response body is available.
	fn send(&self, request: OutgoingRequest) -> TransportFuture<'_, IncomingResponse>;
}

/// Fully assembled request handed to a transport.
#[derive(Clone, Debug)]
pub struct OutgoingRequest {
	/// HTTP method.
	pub method: Method,
	/// Absolute request URL.
	pub url: Url,
	/// Final header set, including authentication.
	pub headers: HeaderMap,
	/// Encoded request body.
	pub body: OutgoingBody,
}

/// Request body after the gateway has chosen its encoding.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum OutgoingBody {
	/// No body.
	#[default]
	Empty,
	/// Pre-encoded bytes; the matching `Content-Type` is already in the headers.
	Bytes(Vec<u8>),
	/// Multipart form; the transport owns the boundary and its `Content-Type`.
	Multipart(MultipartForm),
}

/// Ordered multipart form payload, such as a checkout with an uploaded receipt.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultipartForm {
	/// Fields in submission order.
	pub fields: Vec<MultipartField>,
}
impl MultipartForm {
	/// Creates an empty form.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a text field.
	pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.fields
			.push(MultipartField { name: name.into(), value: MultipartValue::Text(value.into()) });

		self
	}

	/// Appends a file field.
	pub fn file(
		mut self,
		name: impl Into<String>,
		file_name: impl Into<String>,
		mime: impl Into<String>,
		bytes: impl Into<Vec<u8>>,
	) -> Self {
		self.fields.push(MultipartField {
			name: name.into(),
			value: MultipartValue::File {
				file_name: file_name.into(),
				mime: mime.into(),
				bytes: bytes.into(),
			},
		});

		self
	}
}

/// Single multipart field.
#[derive(Clone, Debug, PartialEq)]
pub struct MultipartField {
	/// Form field name.
	pub name: String,
	/// Field content.
	pub value: MultipartValue,
}

/// Content of a [`MultipartField`].
#[derive(Clone, Debug, PartialEq)]
pub enum MultipartValue {
	/// Plain text value.
	Text(String),
	/// File upload.
	File {
		/// File name reported to the server.
		file_name: String,
		/// MIME type of the file.
		mime: String,
		/// Raw file contents.
		bytes: Vec<u8>,
	},
}

/// Response returned by a transport, body fully buffered.
#[derive(Clone, Debug)]
pub struct IncomingResponse {
	/// HTTP status.
	pub status: StatusCode,
	/// Reason phrase, when the transport knows one.
	pub status_text: Option<String>,
	/// Response headers.
	pub headers: HeaderMap,
	/// Raw body bytes.
	pub body: Vec<u8>,
}
impl IncomingResponse {
	/// Builds a response whose status text is the canonical reason for `status`.
	pub fn new(status: StatusCode, headers: HeaderMap, body: impl Into<Vec<u8>>) -> Self {
		Self {
			status,
			status_text: status.canonical_reason().map(str::to_owned),
			headers,
			body: body.into(),
		}
	}

	/// Returns `true` for statuses in `[200, 300)`.
	pub fn is_success(&self) -> bool {
		self.status.is_success()
	}

	/// Returns the declared `Content-Type`, if readable.
	pub fn content_type(&self) -> Option<&str> {
		self.headers.get(::http::header::CONTENT_TYPE).and_then(|value| value.to_str().ok())
	}

	/// Decodes the body as text, replacing invalid UTF-8 sequences.
	pub fn text(&self) -> String {
		String::from_utf8_lossy(&self.body).into_owned()
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestTransport {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	fn multipart_form(form: MultipartForm) -> Result<reqwest::multipart::Form, ReqwestError> {
		use reqwest::multipart::{Form, Part};

		let mut out = Form::new();

		for field in form.fields {
			out = match field.value {
				MultipartValue::Text(value) => out.text(field.name, value),
				MultipartValue::File { file_name, mime, bytes } => out.part(
					field.name,
					Part::bytes(bytes).file_name(file_name).mime_str(&mime)?,
				),
			};
		}

		Ok(out)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestTransport {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestTransport {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl HttpTransport for ReqwestTransport {
	fn send(&self, request: OutgoingRequest) -> TransportFuture<'_, IncomingResponse> {
		let client = self.0.clone();

		Box::pin(async move {
			let OutgoingRequest { method, url, headers, body } = request;
			let builder = client.request(method, url).headers(headers);
			let builder = match body {
				OutgoingBody::Empty => builder,
				OutgoingBody::Bytes(bytes) => builder.body(bytes),
				OutgoingBody::Multipart(form) => builder.multipart(Self::multipart_form(form)?),
			};
			let response = builder.send().await?;
			let status = response.status();
			let headers = response.headers().to_owned();
			let body = response.bytes().await?.to_vec();

			Ok(IncomingResponse::new(status, headers, body))
		})
	}
}
