//! Redacted session token wrapper.

// self
use crate::{_prelude::*, error::ConfigError};

/// Opaque bearer credential identifying an authenticated storefront session.
///
/// Formatting never reveals the secret, so tokens can sit inside logged structs safely.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);
impl SessionToken {
	/// Wraps a new token string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Wraps a stored value, treating an empty string as no session.
	pub fn from_stored(value: impl Into<String>) -> Option<Self> {
		let value = value.into();

		if value.is_empty() { None } else { Some(Self(value)) }
	}

	/// Returns the inner token value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// Renders the `Authorization` header value for this token.
	pub fn bearer_header(&self) -> Result<HeaderValue, ConfigError> {
		let mut value = HeaderValue::try_from(format!("Bearer {}", self.0)).map_err(|_| {
			ConfigError::InvalidHeaderValue { name: ::http::header::AUTHORIZATION.to_string() }
		})?;

		value.set_sensitive(true);

		Ok(value)
	}
}
impl AsRef<str> for SessionToken {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for SessionToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("SessionToken").field(&"<redacted>").finish()
	}
}
impl Display for SessionToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn token_formatters_redact() {
		let token = SessionToken::new("super-secret");

		assert_eq!(format!("{token:?}"), "SessionToken(\"<redacted>\")");
		assert_eq!(format!("{token}"), "<redacted>");
	}

	#[test]
	fn empty_stored_values_are_not_sessions() {
		assert!(SessionToken::from_stored("").is_none());
		assert_eq!(
			SessionToken::from_stored("abc").map(|token| token.expose().to_owned()),
			Some("abc".into())
		);
	}

	#[test]
	fn bearer_header_is_sensitive_and_rejects_control_characters() {
		let header =
			SessionToken::new("abc.def").bearer_header().expect("Plain token should be header-safe.");

		assert_eq!(header.to_str().ok(), Some("Bearer abc.def"));
		assert!(header.is_sensitive());

		let err = SessionToken::new("line\nbreak")
			.bearer_header()
			.expect_err("Newlines must be rejected in header values.");

		assert!(matches!(err, ConfigError::InvalidHeaderValue { .. }));
	}
}
