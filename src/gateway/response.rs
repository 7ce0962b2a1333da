//! Response decoding and HTTP failure normalization.

// self
use crate::{
	_prelude::*,
	error::{DecodeError, HttpError},
	http::IncomingResponse,
};

/// Successful response body, shaped by its declared content type.
#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
	/// Parsed body of an `application/json` response.
	Json(JsonValue),
	/// Raw body of any other response.
	Text(String),
}
impl Payload {
	/// Returns the JSON value, if this is a JSON payload.
	pub fn as_json(&self) -> Option<&JsonValue> {
		match self {
			Self::Json(value) => Some(value),
			Self::Text(_) => None,
		}
	}

	/// Returns the text, if this is a text payload.
	pub fn as_text(&self) -> Option<&str> {
		match self {
			Self::Json(_) => None,
			Self::Text(text) => Some(text),
		}
	}

	/// Deserializes a JSON payload into `T`, reporting the failing path on mismatch.
	pub fn into_json<T>(self) -> Result<T>
	where
		T: DeserializeOwned,
	{
		match self {
			Self::Json(value) => serde_path_to_error::deserialize(value)
				.map_err(|source| DecodeError::Mismatch { source }.into()),
			Self::Text(_) => Err(DecodeError::NotJson.into()),
		}
	}
}

/// Turns a raw transport response into a [`Payload`] or a normalized [`HttpError`].
pub fn decode_response(response: IncomingResponse) -> Result<Payload> {
	if !response.is_success() {
		let body = response.text();

		return Err(HttpError::from_parts(
			response.status.as_u16(),
			&body,
			response.status_text.as_deref(),
		)
		.into());
	}
	if declares_json(response.content_type()) {
		let value = serde_json::from_slice(&response.body)
			.map_err(|source| DecodeError::MalformedJson { source })?;

		return Ok(Payload::Json(value));
	}

	Ok(Payload::Text(response.text()))
}

fn declares_json(content_type: Option<&str>) -> bool {
	content_type.is_some_and(|value| value.to_ascii_lowercase().contains("application/json"))
}
